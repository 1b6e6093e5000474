//! Tower middleware for the relay.

pub mod cors;
