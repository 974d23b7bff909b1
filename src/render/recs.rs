//! Recommendation list builder
//!
//! One transform shared by every panel that reports recommendations, tips,
//! risk indicators, or insights. The service sends either a structured record
//! or a bare string; both render through the same item shape.

use serde::Deserialize;

use crate::render::format::currency;

/// Severity of an advisory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecKind {
    Critical,
    Warning,
    Success,
    #[default]
    Info,
    /// Any kind the service sends that we do not know about.
    Other,
}

impl RecKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "critical" => RecKind::Critical,
            "warning" => RecKind::Warning,
            "success" => RecKind::Success,
            "info" => RecKind::Info,
            _ => RecKind::Other,
        }
    }

    /// Icon glyph for the kind. Critical, info and unknown kinds carry none.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            RecKind::Warning => Some("\u{1F7E0}"),
            RecKind::Success => Some("\u{1F7E2}"),
            _ => None,
        }
    }
}

/// One advisory item as the panels consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub kind: RecKind,
    pub category: Option<String>,
    pub message: String,
    pub saving_potential: f64,
}

impl Recommendation {
    /// Plain informational item, used for service tip lists.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: RecKind::Info,
            category: None,
            message: message.into(),
            saving_potential: 0.0,
        }
    }
}

impl From<&str> for Recommendation {
    fn from(message: &str) -> Self {
        Recommendation::info(message)
    }
}

impl From<String> for Recommendation {
    fn from(message: String) -> Self {
        Recommendation::info(message)
    }
}

/// Wire form of a recommendation: a structured record or a bare string.
///
/// Structured records name the message field either `message` or `text`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecPayload {
    Structured {
        #[serde(rename = "type", default)]
        kind: Option<String>,
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        saving_potential: f64,
    },
    Plain(String),
}

impl From<RecPayload> for Recommendation {
    fn from(payload: RecPayload) -> Self {
        match payload {
            RecPayload::Structured {
                kind,
                category,
                message,
                text,
                saving_potential,
            } => Recommendation {
                kind: kind.as_deref().map(RecKind::from_key).unwrap_or_default(),
                category,
                message: message.or(text).unwrap_or_default(),
                saving_potential,
            },
            RecPayload::Plain(message) => Recommendation::info(message),
        }
    }
}

/// Rendered list entry. Field order is display order: icon, category,
/// message, saving annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecItem {
    pub kind: RecKind,
    pub glyph: Option<&'static str>,
    pub category: Option<String>,
    pub message: String,
    /// Present only when the saving potential is positive.
    pub saving: Option<String>,
}

/// Builds one rendered list entry from an advisory item.
pub fn build_item(rec: impl Into<Recommendation>) -> RecItem {
    let rec = rec.into();
    let saving = (rec.saving_potential > 0.0)
        .then(|| format!("Potential saving: {}", currency(rec.saving_potential)));
    RecItem {
        kind: rec.kind,
        glyph: rec.kind.glyph(),
        category: rec.category,
        message: rec.message,
        saving,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: RecKind, message: &str, saving_potential: f64) -> Recommendation {
        Recommendation {
            kind,
            category: None,
            message: message.to_string(),
            saving_potential,
        }
    }

    #[test]
    fn test_warning_gets_warning_glyph_only() {
        let item = build_item(rec(RecKind::Warning, "X", 0.0));
        assert_eq!(item.glyph, Some("\u{1F7E0}"));
        assert_ne!(item.glyph, RecKind::Success.glyph());
    }

    #[test]
    fn test_critical_info_and_unknown_have_no_glyph() {
        assert_eq!(build_item(rec(RecKind::Critical, "X", 0.0)).glyph, None);
        assert_eq!(build_item(rec(RecKind::Info, "X", 0.0)).glyph, None);
        assert_eq!(build_item(rec(RecKind::Other, "X", 0.0)).glyph, None);
    }

    #[test]
    fn test_zero_saving_potential_omits_annotation() {
        let item = build_item(rec(RecKind::Success, "Y", 0.0));
        assert_eq!(item.saving, None);
    }

    #[test]
    fn test_positive_saving_potential_is_formatted() {
        let item = build_item(rec(RecKind::Success, "Y", 500.0));
        assert_eq!(item.saving.as_deref(), Some("Potential saving: Ksh 500"));
    }

    #[test]
    fn test_bare_string_becomes_info_item() {
        let item = build_item("Track your expenses");
        assert_eq!(item.kind, RecKind::Info);
        assert_eq!(item.message, "Track your expenses");
        assert_eq!(item.category, None);
    }

    #[test]
    fn test_payload_accepts_text_field_and_unknown_kind() {
        let payload: RecPayload =
            serde_json::from_str(r#"{"type":"urgent","text":"Check debt"}"#).unwrap();
        let item = build_item(Recommendation::from(payload));
        assert_eq!(item.kind, RecKind::Other);
        assert_eq!(item.glyph, None);
        assert_eq!(item.message, "Check debt");
    }

    #[test]
    fn test_payload_plain_string() {
        let payload: RecPayload = serde_json::from_str(r#""just a tip""#).unwrap();
        let rec = Recommendation::from(payload);
        assert_eq!(rec.message, "just a tip");
    }

    #[test]
    fn test_structured_payload_with_category_and_saving() {
        let payload: RecPayload = serde_json::from_str(
            r#"{"type":"warning","category":"Dining","message":"Cut back","saving_potential":1500}"#,
        )
        .unwrap();
        let item = build_item(Recommendation::from(payload));
        assert_eq!(item.category.as_deref(), Some("Dining"));
        assert_eq!(item.saving.as_deref(), Some("Potential saving: Ksh 1,500"));
    }
}
