pub mod api;
pub mod view;

pub use view::{CompareForm, ModeToggles, TopicForm};
