//! Model family classification.

use serde_json::Value;

/// Closed set of upstream model families with payload-shape constraints.
///
/// Classification is a pure function of the model identifier. Unknown names
/// fall into `Gemini`, the pass-through family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// `gemma-*` models. Reject system instructions.
    Gemma,
    /// Everything else. No payload restrictions.
    Gemini,
}

impl ModelFamily {
    pub fn from_model(model: &str) -> Self {
        if model.to_ascii_lowercase().starts_with("gemma") {
            Self::Gemma
        } else {
            Self::Gemini
        }
    }

    /// Family name used as the usage-counter key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gemma => "gemma",
            Self::Gemini => "gemini",
        }
    }

    /// Top-level payload fields this family refuses upstream.
    fn rejected_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Gemma => &["systemInstruction", "system_instruction"],
            Self::Gemini => &[],
        }
    }

    /// Strip the fields the family does not accept, in place.
    pub fn adapt(&self, payload: &mut Value) {
        let Some(obj) = payload.as_object_mut() else { return };
        for field in self.rejected_fields() {
            if obj.remove(*field).is_some() {
                tracing::debug!("[Relay] Stripped {} for {} family", field, self.name());
            }
        }
    }
}
