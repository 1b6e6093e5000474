// Request body → upstream payload shaping
use serde_json::{json, Value};

/// Model used when the client does not name one.
pub const DEFAULT_MODEL: &str = "gemma-3-27b-it";

pub fn resolve_model(body: &Value) -> String {
    body.get("model")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MODEL)
        .to_string()
}

/// Select the conversation payload from the request body.
///
/// Precedence: an explicit `payload` object, then a bare `prompt` string
/// wrapped into a single user turn, then the body itself (minus the routing
/// keys) used as the payload directly.
pub fn resolve_payload(body: &Value) -> Value {
    if let Some(payload) = body.get("payload") {
        return payload.clone();
    }

    if let Some(prompt) = body.get("prompt").and_then(|p| p.as_str()) {
        return json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}]
        });
    }

    let mut payload = body.clone();
    if let Some(obj) = payload.as_object_mut() {
        obj.remove("model");
    }
    payload
}

/// Prepend persona text as a synthetic leading user turn.
///
/// Goes into `contents` rather than `systemInstruction` so it survives the
/// Gemma adaptation unchanged.
pub fn inject_persona(payload: &mut Value, persona: &str) {
    let turn = json!({"role": "user", "parts": [{"text": persona}]});

    match payload.get_mut("contents").and_then(|c| c.as_array_mut()) {
        Some(contents) => contents.insert(0, turn),
        None => {
            if let Some(obj) = payload.as_object_mut() {
                obj.insert("contents".to_string(), json!([turn]));
            }
        }
    }
}
