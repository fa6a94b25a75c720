use super::formatting::format_bullets;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Label used when the conversation is replayed as plain text.
    pub fn transcript_label(&self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "AI",
        }
    }
}

/// One rendered chat turn.
///
/// Assistant text is stored already reformatted, so the transcript and the
/// price harvesting see exactly what the bubble shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub sources: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Создать сообщение пользователя
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text.into(), Vec::new())
    }

    /// Создать сообщение ассистента
    pub fn assistant(text: impl Into<String>, sources: Vec<String>) -> Self {
        let text = format_bullets(&text.into());
        Self::new(ChatRole::Assistant, text, sources)
    }

    fn new(role: ChatRole, text: String, sources: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text,
            sources,
            created_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_text_is_kept_verbatim() {
        let msg = ChatMessage::user("Is it waterproof? Also, what about warranty. Thanks");
        assert!(msg.is_user());
        assert_eq!(msg.text, "Is it waterproof? Also, what about warranty. Thanks");
        assert!(!msg.has_sources());
    }

    #[test]
    fn test_assistant_text_is_bulleted() {
        let msg = ChatMessage::assistant(
            "The battery lasts twelve hours. The display is a 14 inch panel",
            vec!["https://example.com/spec".into()],
        );
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(
            msg.text,
            "• The battery lasts twelve hours.\n• The display is a 14 inch panel."
        );
        assert!(msg.has_sources());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&ChatRole::Assistant).unwrap(), "\"assistant\"");
        assert_eq!(ChatRole::User.transcript_label(), "User");
        assert_eq!(ChatRole::Assistant.transcript_label(), "AI");
    }
}
