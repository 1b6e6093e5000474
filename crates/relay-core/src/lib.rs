//! Core relay logic.
//!
//! Everything the `/call-ai` path needs lives here: payload resolution,
//! model-family adaptation, persona injection, the upstream client and the
//! usage tracker. The `relay-server` binary wires these together and adds the
//! management endpoints around them.

pub mod error;
pub mod gateway;
pub mod middleware;
pub mod persona;
pub mod upstream;
pub mod usage;

pub use error::ApiError;
pub use gateway::{build_gateway_router, GatewayState};
pub use persona::PersonaRegistry;
pub use upstream::UpstreamClient;
pub use usage::UsageTracker;
