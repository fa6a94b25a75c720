pub mod aggregate;
pub mod reference;

pub use aggregate::TopicSession;
pub use reference::{OcrMode, TopicReference, TopicSlot};
