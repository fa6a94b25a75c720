//! Plain-text replay of the visible conversation.

use super::aggregate::ChatMessage;

/// `"User: …\n\nAI: …\n\n"` for every non-empty message, in order.
pub fn build_transcript(messages: &[ChatMessage]) -> String {
    let mut out = String::new();
    for msg in messages {
        let text = msg.text.trim();
        if text.is_empty() {
            continue;
        }
        out.push_str(msg.role.transcript_label());
        out.push_str(": ");
        out.push_str(text);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_labels_and_order() {
        let messages = vec![
            ChatMessage::user("Does the ACME 14 have a backlit keyboard?"),
            ChatMessage::assistant("Yes.", vec![]),
            ChatMessage::user("   "),
        ];
        assert_eq!(
            build_transcript(&messages),
            "User: Does the ACME 14 have a backlit keyboard?\n\nAI: Yes.\n\n"
        );
    }

    #[test]
    fn test_empty_conversation() {
        assert_eq!(build_transcript(&[]), "");
    }
}
