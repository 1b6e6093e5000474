//! Data models shared across the relay.

mod config;
mod stats;

pub use config::RelayConfig;
pub use stats::{FamilyUsage, UsageRecord};
