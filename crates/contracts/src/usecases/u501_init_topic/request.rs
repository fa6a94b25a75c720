use crate::domain::a002_topic_session::{OcrMode, TopicReference, TopicSlot};
use crate::shared::form::FormFields;

pub const INIT_TOPIC_PATH: &str = "/api/init-topic";
pub const COMPARE_INIT_PATH: &str = "/api/compare/init-topic";
pub const RAG_PATH: &str = "/api/rag";

pub const MISSING_TOPIC_INPUT: &str = "Please attach a PDF or provide a URL/Product name.";
pub const MISSING_COMPARE_INPUT: &str =
    "Please attach a PDF or provide a URL/Product name for the second product.";
pub const PRIMARY_TOPIC_REQUIRED: &str = "Please confirm the main topic first.";

/// Text part of a `/api/init-topic` post. The PDF, if any, is appended by
/// the caller under [`TopicSlot::Primary`]'s file field.
#[derive(Debug, Clone, PartialEq)]
pub struct InitTopicRequest {
    pub reference: Option<TopicReference>,
    pub ocr_mode: OcrMode,
}

impl InitTopicRequest {
    /// Needs a file or a non-blank reference.
    pub fn new(raw: &str, has_file: bool, ocr_mode: OcrMode) -> Result<Self, &'static str> {
        let reference = TopicReference::parse(raw);
        if reference.is_none() && !has_file {
            return Err(MISSING_TOPIC_INPUT);
        }
        Ok(Self {
            reference,
            ocr_mode,
        })
    }

    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        if let Some(reference) = &self.reference {
            fields.push(reference.field_name(TopicSlot::Primary), reference.value());
        }
        fields.push("ocr_mode", self.ocr_mode.as_str());
        fields
    }
}

/// Text part of a `/api/compare/init-topic` post. Side A reuses the primary
/// topic form's inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareInitRequest {
    pub a: Option<TopicReference>,
    pub b: Option<TopicReference>,
}

impl CompareInitRequest {
    pub fn new(
        topic_selected: bool,
        raw_a: &str,
        raw_b: &str,
        has_file_b: bool,
    ) -> Result<Self, &'static str> {
        if !topic_selected {
            return Err(PRIMARY_TOPIC_REQUIRED);
        }
        let b = TopicReference::parse(raw_b);
        if b.is_none() && !has_file_b {
            return Err(MISSING_COMPARE_INPUT);
        }
        Ok(Self {
            a: TopicReference::parse(raw_a),
            b,
        })
    }

    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        if let Some(a) = &self.a {
            fields.push(a.field_name(TopicSlot::CompareA), a.value());
        }
        if let Some(b) = &self.b {
            fields.push(b.field_name(TopicSlot::CompareB), b.value());
        }
        fields
    }
}

/// Switch document-grounded answering on or off for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RagToggleRequest {
    pub enabled: bool,
}

impl RagToggleRequest {
    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push("enabled", if self.enabled { "true" } else { "false" });
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_requires_file_or_text() {
        assert_eq!(
            InitTopicRequest::new("  ", false, OcrMode::Auto),
            Err(MISSING_TOPIC_INPUT)
        );
        let with_file = InitTopicRequest::new("", true, OcrMode::Force).unwrap();
        let fields = with_file.fields();
        assert_eq!(fields.get("ocr_mode"), Some("force"));
        assert_eq!(fields.iter().count(), 1);
    }

    #[test]
    fn test_topic_reference_field() {
        let req = InitTopicRequest::new("https://shop.example/p/1", false, OcrMode::Auto).unwrap();
        assert_eq!(req.fields().get("url"), Some("https://shop.example/p/1"));

        let req = InitTopicRequest::new("ACME 14", false, OcrMode::Auto).unwrap();
        assert_eq!(req.fields().get("product_name"), Some("ACME 14"));
    }

    #[test]
    fn test_compare_requires_primary_topic() {
        assert_eq!(
            CompareInitRequest::new(false, "ACME 14", "Zen 14", false),
            Err(PRIMARY_TOPIC_REQUIRED)
        );
        assert_eq!(
            CompareInitRequest::new(true, "ACME 14", "", false),
            Err(MISSING_COMPARE_INPUT)
        );
    }

    #[test]
    fn test_rag_toggle_field() {
        let fields = RagToggleRequest { enabled: false }.fields();
        assert_eq!(fields.get("enabled"), Some("false"));
    }

    #[test]
    fn test_compare_fields() {
        let req = CompareInitRequest::new(true, "ACME 14", "https://zen.example", false).unwrap();
        let fields = req.fields();
        assert_eq!(fields.get("a_name"), Some("ACME 14"));
        assert_eq!(fields.get("b_url"), Some("https://zen.example"));
        assert_eq!(fields.get("a_url"), None);
    }
}
