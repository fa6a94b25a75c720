pub mod a001_chat_message;
