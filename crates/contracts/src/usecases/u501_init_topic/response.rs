use crate::shared::api::ApiError;
use serde::{Deserialize, Serialize};

pub const TOPIC_PENDING: &str = "⏳ Uploading/processing…";
pub const NO_TOPIC: &str = "No topic selected";
pub const PAIR_PENDING: &str = "⏳ Pairing topics…";
pub const PAIR_READY: &str = "✅ Comparison pair set. Ask a question to compare.";

/// `data` of a successful `/api/init-topic` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitTopicData {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub meta: TopicMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl InitTopicData {
    pub fn primary_name(&self) -> &str {
        self.primary
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("Unknown")
    }

    /// Where the topic came from, e.g. ` (from PDF: spec.pdf)`.
    pub fn origin_suffix(&self) -> String {
        match self.meta.source.as_deref() {
            Some("pdf") => match self.meta.filename.as_deref().filter(|f| !f.is_empty()) {
                Some(name) => format!(" (from PDF: {name})"),
                None => " (from PDF)".to_string(),
            },
            Some("url") => " (from URL)".to_string(),
            _ => " (from product name)".to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.primary_name(), self.origin_suffix())
    }

    pub fn status_line(&self) -> String {
        format!("✅ Topic: {}", self.label())
    }

    pub fn history_line(&self) -> String {
        format!("Topic selected: {}", self.label())
    }
}

/// Status line for a failed `/api/init-topic` call.
pub fn topic_failure_line(err: &ApiError) -> String {
    match err {
        ApiError::Http { status, detail } => format!("❌ Init failed ({status}): {detail}"),
        ApiError::Application(_) => "❌ Failed to initialize topic".to_string(),
        ApiError::Network(reason) | ApiError::Decode(reason) => {
            format!("❌ Network error during init: {reason}")
        }
    }
}

/// Status line for a failed `/api/compare/init-topic` call.
pub fn pair_failure_line(err: &ApiError) -> String {
    match err {
        ApiError::Application(_) => "❌ Could not set comparison pair.".to_string(),
        other => format!("❌ Network error: {other}"),
    }
}

/// `data` of `/api/rag`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagState {
    #[serde(default)]
    pub rag_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> InitTopicData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_status_from_pdf() {
        let data = parse(r#"{"primary":"ACME 14","meta":{"source":"pdf","filename":"acme.pdf"}}"#);
        assert_eq!(data.status_line(), "✅ Topic: ACME 14 (from PDF: acme.pdf)");
        assert_eq!(data.history_line(), "Topic selected: ACME 14 (from PDF: acme.pdf)");
    }

    #[test]
    fn test_status_from_url_and_name() {
        let data = parse(r#"{"primary":"Zen 14","meta":{"source":"url"}}"#);
        assert_eq!(data.label(), "Zen 14 (from URL)");

        let data = parse(r#"{"primary":"Zen 14","meta":{"source":"manual"}}"#);
        assert_eq!(data.label(), "Zen 14 (from product name)");
    }

    #[test]
    fn test_failure_lines() {
        let http = ApiError::Http {
            status: 413,
            detail: "file too large".into(),
        };
        assert_eq!(topic_failure_line(&http), "❌ Init failed (413): file too large");
        assert_eq!(
            topic_failure_line(&ApiError::Network("offline".into())),
            "❌ Network error during init: offline"
        );
        assert_eq!(
            pair_failure_line(&ApiError::Application("{}".into())),
            "❌ Could not set comparison pair."
        );
        assert_eq!(
            pair_failure_line(&ApiError::Network("offline".into())),
            "❌ Network error: offline"
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let data = parse("{}");
        assert_eq!(data.label(), "Unknown (from product name)");
    }
}
