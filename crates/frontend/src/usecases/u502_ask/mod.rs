pub mod api;
pub mod flow;
pub mod view;

pub use flow::{clear_history, start_new_chat, submit_question};
pub use view::Composer;
