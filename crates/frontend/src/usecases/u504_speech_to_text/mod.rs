pub mod api;
pub mod recognizer;
pub mod recorder;
pub mod view;

pub use view::VoiceButton;
