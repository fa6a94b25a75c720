//! Conversation summary for the lead form: an LLM prompt, the cleanup of its
//! answer, and a keyword-based fallback when the model gives nothing usable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const NO_HISTORY_STATUS: &str = "No chat history found to summarize";
pub const GENERATED_STATUS: &str = "Summary generated! You can edit it before sending.";
pub const FALLBACK_STATUS: &str = "Generated basic summary. Please edit as needed.";

const EMPTY_HISTORY_SUMMARY: &str =
    "Customer inquiry - please provide details about the conversation.";

const PRODUCT_KEYWORDS: [&str; 10] = [
    "iPhone",
    "Samsung",
    "Galaxy",
    "MacBook",
    "iPad",
    "Tesla",
    "PlayStation",
    "Xbox",
    "Nike",
    "Adidas",
];

static BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));

/// Question posted to `/api/ask` to get a summary for the store manager.
pub fn summary_question(transcript: &str) -> String {
    format!(
        "Please provide a concise business summary of this chat conversation for a sales manager. \
         Focus on: 1) What product/topic was discussed, 2) Key questions asked, \
         3) Customer interest level, 4) Any specific requirements mentioned. \
         Keep it under 150 words and professional.\n\nChat History:\n{transcript}"
    )
}

/// Drop list markers and blank lines. `None` when too short to be useful.
pub fn clean_generated_summary(answer: &str) -> Option<String> {
    let stripped: String = answer
        .chars()
        .filter(|c| !matches!(c, '•' | '-' | '*'))
        .collect();
    let cleaned = BLANK_LINES_RE.replace_all(&stripped, "\n").trim().to_string();
    (cleaned.chars().count() > 10).then_some(cleaned)
}

/// Usable summary from an ask answer: `answer`, else `final_answer`, cleaned.
pub fn summary_from_answer(data: &Value) -> Option<String> {
    ["answer", "final_answer"]
        .iter()
        .filter_map(|key| data.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .and_then(clean_generated_summary)
}

/// Summary built from keywords in the transcript.
pub fn manual_summary(transcript: &str) -> String {
    if transcript.trim().is_empty() {
        return EMPTY_HISTORY_SUMMARY.to_string();
    }

    let lower = transcript.to_lowercase();
    let product = PRODUCT_KEYWORDS
        .iter()
        .find(|kw| lower.contains(&kw.to_lowercase()))
        .map(|kw| format!("{kw} inquiry"))
        .unwrap_or_else(|| "Product inquiry".to_string());

    let mut summary = format!(
        "{product} - Customer engaged in conversation about product features and pricing."
    );

    let questions = transcript
        .lines()
        .filter(|l| !l.trim().is_empty() && l.starts_with("User:"))
        .count();
    if questions > 1 {
        summary.push_str(&format!(
            " Customer asked {questions} questions showing active interest."
        ));
    }

    if ["$", "price", "cost"].iter().any(|k| transcript.contains(k)) {
        summary.push_str(" Pricing was discussed.");
    }
    if ["compare", "vs", "alternative"]
        .iter()
        .any(|k| transcript.contains(k))
    {
        summary.push_str(" Customer interested in product comparisons.");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_embeds_transcript() {
        let q = summary_question("User: hi\n\n");
        assert!(q.starts_with("Please provide a concise business summary"));
        assert!(q.ends_with("Chat History:\nUser: hi\n\n"));
    }

    #[test]
    fn test_cleanup() {
        assert_eq!(
            clean_generated_summary("• Customer wants ACME 14\n\n\n- Asked about price*"),
            Some("Customer wants ACME 14\n Asked about price".to_string())
        );
        assert_eq!(clean_generated_summary("  • ok  "), None);
    }

    #[test]
    fn test_summary_from_answer() {
        let data = serde_json::json!({"answer": "", "final_answer": "Customer wants 10 units of ACME 14"});
        assert_eq!(
            summary_from_answer(&data).as_deref(),
            Some("Customer wants 10 units of ACME 14")
        );
        assert_eq!(summary_from_answer(&serde_json::json!({"answer": "short"})), None);
        assert_eq!(summary_from_answer(&serde_json::json!(null)), None);
    }

    #[test]
    fn test_manual_summary_empty() {
        assert_eq!(manual_summary("  \n"), EMPTY_HISTORY_SUMMARY);
    }

    #[test]
    fn test_manual_summary_keywords() {
        let transcript = "User: Is the Galaxy S24 worth it?\n\nAI: It is.\n\n\
                          User: What does it cost vs the iPhone?\n\nAI: About $799.\n\n";
        assert_eq!(
            manual_summary(transcript),
            "iPhone inquiry - Customer engaged in conversation about product features and pricing. \
             Customer asked 2 questions showing active interest. Pricing was discussed. \
             Customer interested in product comparisons."
        );
    }

    #[test]
    fn test_manual_summary_plain() {
        assert_eq!(
            manual_summary("User: Hello\n\nAI: Hi there\n\n"),
            "Product inquiry - Customer engaged in conversation about product features and pricing."
        );
    }
}
