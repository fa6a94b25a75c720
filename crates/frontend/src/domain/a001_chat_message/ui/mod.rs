pub mod bubble;
pub mod list;
pub mod speech;

pub use bubble::{MessageBubble, TypingBubble};
pub use list::MessageList;
