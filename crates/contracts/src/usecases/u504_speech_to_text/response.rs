use serde::{Deserialize, Serialize};

/// Body of `/api/stt`. Older servers answer `{"status":"ok"}` instead of the
/// usual `{"ok":true}` envelope, so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SttResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<SttData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SttData {
    #[serde(default)]
    pub text: Option<String>,
}

impl SttResponse {
    pub const NOT_TRANSCRIBED: &'static str = "Could not transcribe audio.";

    pub fn is_success(&self) -> bool {
        self.ok == Some(true) || self.status.as_deref() == Some("ok")
    }

    /// Trimmed transcription of a successful response, if any.
    pub fn text(&self) -> Option<String> {
        if !self.is_success() {
            return None;
        }
        self.data
            .as_ref()
            .and_then(|d| d.text.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SttResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_both_success_markers() {
        assert_eq!(
            parse(r#"{"status":"ok","data":{"text":" battery life? "}}"#).text(),
            Some("battery life?".to_string())
        );
        assert_eq!(
            parse(r#"{"ok":true,"data":{"text":"weight"}}"#).text(),
            Some("weight".to_string())
        );
    }

    #[test]
    fn test_failures_have_no_text() {
        assert_eq!(parse(r#"{"ok":false,"data":{"text":"x"}}"#).text(), None);
        assert_eq!(parse(r#"{"status":"ok","data":{"text":"   "}}"#).text(), None);
        assert_eq!(parse(r#"{"status":"ok"}"#).text(), None);
    }
}
