pub mod preview;
pub mod request;
pub mod response;
pub mod sequence;
pub mod summary;

pub use preview::{parse_preview, render_preview, PREVIEW_REQUIRED};
pub use request::{SendEmailRequest, PREPARE_PATH, SEND_PATH};
pub use response::{PreparedEmail, SendOutcome, SendResult};
pub use sequence::{LeadCall, LeadSequencer, LeadTicket};
pub use summary::{
    clean_generated_summary, manual_summary, summary_from_answer, summary_question,
    FALLBACK_STATUS, GENERATED_STATUS, NO_HISTORY_STATUS,
};
