pub mod u501_init_topic;
pub mod u502_ask;
pub mod u503_sales_connect;
pub mod u504_speech_to_text;
