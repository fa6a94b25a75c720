pub mod request;
pub mod response;

pub use request::{AskRequest, ASK_PATH, CLEAR_PATH, COMPARE_ASK_PATH};
pub use response::{ask_failure_line, AskOutcome, AssistantReply, ComparePayload, DualEnginePayload};
