//! Shared types for the LLM relay.
//!
//! This crate holds the serde models and the error taxonomy used by both
//! `relay-core` and `relay-server`. It deliberately has no HTTP or runtime
//! dependencies so it stays cheap to depend on.

pub mod error;
pub mod models;

pub use error::GatewayError;
pub use models::{FamilyUsage, RelayConfig, UsageRecord};
