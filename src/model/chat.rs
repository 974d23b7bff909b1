//! Conversational assistant wire types (`/api/chat`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// One assistant reply. `category` defaults to `general`, which is never
/// counted as a distinct topic; `quick_replies`, when present, replaces the
/// current quick-reply set wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub quick_replies: Option<Vec<String>>,
}

fn default_category() -> String {
    "general".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_to_general() {
        let response: ChatResponse = serde_json::from_str(r#"{"response": "Hi"}"#).unwrap();
        assert_eq!(response.category, "general");
        assert!(response.quick_replies.is_none());
    }

    #[test]
    fn test_quick_replies_parse_when_present() {
        let raw = r#"{"response": "Hi", "category": "greeting", "quick_replies": ["How do I save?"]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.quick_replies.unwrap().len(), 1);
    }
}
