use super::validation::{is_valid_email, is_valid_phone};
use crate::shared::form::FormFields;
use serde::{Deserialize, Serialize};

/// Lead details a visitor hands to the store manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub product_ref: String,
    pub quoted_price: String,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub best_time: String,
    pub summary: String,
    pub consent: bool,
}

impl LeadDraft {
    /// Copy with every text field trimmed, as collected from the form.
    pub fn normalized(&self) -> Self {
        Self {
            product_ref: self.product_ref.trim().to_string(),
            quoted_price: self.quoted_price.trim().to_string(),
            user_name: self.user_name.trim().to_string(),
            user_email: self.user_email.trim().to_string(),
            user_phone: self.user_phone.trim().to_string(),
            best_time: self.best_time.trim().to_string(),
            summary: self.summary.trim().to_string(),
            consent: self.consent,
        }
    }

    /// One message per failing rule, in form order. Empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let p = self.normalized();
        let mut errors = Vec::new();
        if p.product_ref.is_empty() {
            errors.push("Product / Variant is required.".to_string());
        }
        if p.user_name.is_empty() {
            errors.push("Your full name is required.".to_string());
        }
        if !is_valid_email(&p.user_email) {
            errors.push("A valid email is required.".to_string());
        }
        if !is_valid_phone(&p.user_phone) {
            errors.push("A valid phone number is required.".to_string());
        }
        if p.summary.is_empty() {
            errors.push("Summary is required.".to_string());
        }
        if !p.consent {
            errors.push("Consent is required.".to_string());
        }
        errors
    }

    /// Fields for `/api/sales/connect/prepare`. Optional fields are left out
    /// when blank.
    pub fn prepare_fields(&self) -> FormFields {
        let p = self.normalized();
        let mut fields = FormFields::new();
        fields.push("user_name", p.user_name);
        fields.push("user_email", p.user_email);
        fields.push("user_phone", p.user_phone);
        fields.push("product_ref", p.product_ref);
        fields.push("summary", p.summary);
        fields.push_non_empty("best_time", &p.best_time);
        fields.push_non_empty("quoted_price", &p.quoted_price);
        fields
    }
}

/// Aggregated alert text for a list of validation failures.
pub fn validation_alert(errors: &[String]) -> String {
    format!("Please fix:\n• {}", errors.join("\n• "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LeadDraft {
        LeadDraft {
            product_ref: "ACME Laptop 14 (16GB/512GB)".into(),
            quoted_price: "₹59,990".into(),
            user_name: "Sam Rivera".into(),
            user_email: "sam@example.com".into(),
            user_phone: "+91 98765 43210".into(),
            best_time: String::new(),
            summary: "Wants a bulk quote for 10 units.".into(),
            consent: true,
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn test_each_failure_adds_one_message() {
        let mut d = valid();
        d.product_ref = "   ".into();
        assert_eq!(d.validate(), vec!["Product / Variant is required."]);

        let mut d = valid();
        d.user_email = "a@b".into();
        assert_eq!(d.validate(), vec!["A valid email is required."]);
        d.user_email = "a@b.com".into();
        assert!(d.validate().is_empty());

        let mut d = valid();
        d.user_phone = "1234567".into();
        assert_eq!(d.validate(), vec!["A valid phone number is required."]);
        d.user_phone = "(123) 4567890".into();
        assert_eq!(d.validate(), vec!["A valid phone number is required."]);

        let mut d = valid();
        d.consent = false;
        assert_eq!(d.validate(), vec!["Consent is required."]);
    }

    #[test]
    fn test_empty_draft_reports_everything() {
        let errors = LeadDraft::default().validate();
        assert_eq!(errors.len(), 6);
        assert_eq!(
            validation_alert(&errors[..2]),
            "Please fix:\n• Product / Variant is required.\n• Your full name is required."
        );
    }

    #[test]
    fn test_prepare_fields_skip_blank_optionals() {
        let fields = valid().prepare_fields();
        assert_eq!(fields.get("user_email"), Some("sam@example.com"));
        assert_eq!(fields.get("quoted_price"), Some("₹59,990"));
        assert_eq!(fields.get("best_time"), None);
        assert_eq!(fields.iter().count(), 6);
    }
}
