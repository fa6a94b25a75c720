pub mod a001_chat_message;
pub mod a002_topic_session;
pub mod a003_lead_draft;
