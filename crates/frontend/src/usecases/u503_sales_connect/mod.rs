pub mod api;
pub mod view;
pub mod view_model;

pub use view::SalesConnectModal;
pub use view_model::{use_sales_connect, SalesConnectVm};
