#[cfg(test)]
mod tests {
    use super::super::payload::{inject_persona, resolve_model, resolve_payload, DEFAULT_MODEL};
    use serde_json::json;

    #[test]
    fn test_resolve_model_default() {
        assert_eq!(resolve_model(&json!({"prompt": "hi"})), DEFAULT_MODEL);
        assert_eq!(resolve_model(&json!({"model": ""})), DEFAULT_MODEL);
        assert_eq!(resolve_model(&json!({"model": 42})), DEFAULT_MODEL);
    }

    #[test]
    fn test_resolve_model_explicit() {
        assert_eq!(
            resolve_model(&json!({"model": "gemini-2.5-flash"})),
            "gemini-2.5-flash"
        );
    }

    #[test]
    fn test_prompt_wraps_into_single_user_turn() {
        let payload = resolve_payload(&json!({"prompt": "hello"}));
        assert_eq!(
            payload,
            json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_explicit_payload_wins_over_prompt() {
        let body = json!({
            "prompt": "ignored",
            "payload": {"contents": [{"role": "user", "parts": [{"text": "real"}]}]}
        });
        let payload = resolve_payload(&body);
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "real");
    }

    #[test]
    fn test_body_used_directly_without_model_key() {
        let body = json!({
            "model": "gemma-3-27b-it",
            "contents": [{"role": "user", "parts": [{"text": "hi"}]}],
            "generationConfig": {"temperature": 0.7}
        });
        let payload = resolve_payload(&body);
        assert!(payload.get("model").is_none());
        assert_eq!(payload["generationConfig"]["temperature"], 0.7);
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_generation_config_passes_through_payload_variant() {
        let body = json!({
            "payload": {
                "contents": [],
                "generationConfig": {"maxOutputTokens": 128},
                "safetySettings": [{"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE"}]
            }
        });
        let payload = resolve_payload(&body);
        assert_eq!(payload["generationConfig"]["maxOutputTokens"], 128);
        assert!(payload["safetySettings"].is_array());
    }

    #[test]
    fn test_inject_persona_prepends_turn() {
        let mut payload =
            json!({"contents": [{"role": "user", "parts": [{"text": "question"}]}]});
        inject_persona(&mut payload, "You are a tutor.");

        let contents = payload["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "You are a tutor.");
        assert_eq!(contents[1]["parts"][0]["text"], "question");
    }

    #[test]
    fn test_inject_persona_creates_contents_when_missing() {
        let mut payload = json!({"generationConfig": {}});
        inject_persona(&mut payload, "persona");
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "persona");
    }
}
