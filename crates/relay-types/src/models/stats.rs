//! Usage accounting records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters for one model family.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FamilyUsage {
    pub requests: u64,
    pub tokens: u64,
}

/// Per-model-family usage counters.
///
/// Serializes transparently, so the persisted file is a flat object:
/// `{"gemma": {"requests": 3, "tokens": 120}, ...}`. A `BTreeMap` keeps the
/// file diff-stable across rewrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UsageRecord {
    pub families: BTreeMap<String, FamilyUsage>,
}

impl UsageRecord {
    /// Increment the counters for `family` by one request and `tokens` tokens.
    pub fn bump(&mut self, family: &str, tokens: u64) {
        let entry = self.families.entry(family.to_string()).or_default();
        entry.requests = entry.requests.saturating_add(1);
        entry.tokens = entry.tokens.saturating_add(tokens);
    }

    pub fn get(&self, family: &str) -> Option<&FamilyUsage> {
        self.families.get(family)
    }
}
