pub mod api_utils;
pub mod constants;
pub mod dom;
pub mod http;
pub mod icons;
pub mod modal;
pub mod theme;
pub mod toast;
