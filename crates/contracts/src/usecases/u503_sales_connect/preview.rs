//! Editable email preview. The text in the preview box is what gets sent,
//! so the subject and body are read back out of it.

use super::request::SendEmailRequest;
use super::response::PreparedEmail;
use once_cell::sync::Lazy;
use regex::Regex;

pub const PREVIEW_REQUIRED: &str = "Please click “Preview Email” first.";

static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Subject:[ \t]*(.*)$").expect("subject pattern is valid"));

pub fn render_preview(email: &PreparedEmail) -> String {
    format!(
        "To: {}\nSubject: {}\n\n{}",
        email.to, email.subject, email.body
    )
}

/// Subject from the first `Subject:` line, body from everything after the
/// first blank line. Both must be non-empty.
pub fn parse_preview(text: &str) -> Result<SendEmailRequest, &'static str> {
    let subject = SUBJECT_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end_matches('\r').to_string())
        .unwrap_or_default();
    let body = text
        .split_once("\n\n")
        .map(|(_, rest)| rest.to_string())
        .unwrap_or_default();

    if subject.is_empty() || body.is_empty() {
        return Err(PREVIEW_REQUIRED);
    }
    Ok(SendEmailRequest { subject, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_then_edit_then_parse() {
        let email = PreparedEmail {
            to: "manager@shop.example".into(),
            subject: "New lead: ACME 14".into(),
            body: "Hi,\n\nSam wants a quote.\n\nThanks".into(),
        };
        let text = render_preview(&email);
        assert!(text.starts_with("To: manager@shop.example\nSubject: New lead: ACME 14\n\n"));

        let edited = text.replace("Sam wants", "Sam Rivera wants");
        let req = parse_preview(&edited).unwrap();
        assert_eq!(req.subject, "New lead: ACME 14");
        assert_eq!(req.body, "Hi,\n\nSam Rivera wants a quote.\n\nThanks");
    }

    #[test]
    fn test_empty_preview_is_rejected() {
        assert_eq!(parse_preview(""), Err(PREVIEW_REQUIRED));
    }

    #[test]
    fn test_missing_body_or_subject() {
        assert_eq!(
            parse_preview("To: a@b.com\nSubject: Hello"),
            Err(PREVIEW_REQUIRED)
        );
        assert_eq!(
            parse_preview("To: a@b.com\nSubject:\n\nBody text"),
            Err(PREVIEW_REQUIRED)
        );
    }
}
