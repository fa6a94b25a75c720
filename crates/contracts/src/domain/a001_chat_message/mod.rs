pub mod aggregate;
pub mod formatting;
pub mod transcript;

pub use aggregate::{ChatMessage, ChatRole};
pub use formatting::{extract_price, format_bullets};
pub use transcript::build_transcript;
