pub mod aggregate;
pub mod validation;

pub use aggregate::{validation_alert, LeadDraft};
pub use validation::{is_valid_email, is_valid_phone};
