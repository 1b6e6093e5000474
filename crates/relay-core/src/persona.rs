//! Origin → persona resolution.

use std::collections::HashMap;

/// Persona texts keyed by exact request origin.
///
/// Resolved once at startup from configuration; per-request lookup is a plain
/// map read. An empty registry disables persona injection entirely.
#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: HashMap<String, String>,
}

impl PersonaRegistry {
    pub fn new(personas: HashMap<String, String>) -> Self {
        Self { personas }
    }

    /// Look up the persona for a request `Origin` header, if any.
    pub fn resolve(&self, origin: Option<&str>) -> Option<&str> {
        origin.and_then(|o| self.personas.get(o)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
