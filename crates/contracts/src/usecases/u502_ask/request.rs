use crate::shared::form::FormFields;

pub const ASK_PATH: &str = "/api/ask";
pub const COMPARE_ASK_PATH: &str = "/api/compare/ask";
/// Server-side conversation reset, fired without waiting for the answer.
pub const CLEAR_PATH: &str = "/api/clear";

/// One question posted to the single-topic or the comparison endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    pub compare: bool,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, compare: bool) -> Self {
        Self {
            question: question.into(),
            compare,
        }
    }

    pub fn path(&self) -> &'static str {
        if self.compare {
            COMPARE_ASK_PATH
        } else {
            ASK_PATH
        }
    }

    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push("question", self.question.clone());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_selection() {
        assert_eq!(AskRequest::new("q", false).path(), "/api/ask");
        assert_eq!(AskRequest::new("q", true).path(), "/api/compare/ask");
        assert_eq!(AskRequest::new("Battery?", true).fields().get("question"), Some("Battery?"));
    }
}
