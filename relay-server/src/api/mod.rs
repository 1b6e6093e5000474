//! Management API handlers.

pub mod login;
pub mod stats;
