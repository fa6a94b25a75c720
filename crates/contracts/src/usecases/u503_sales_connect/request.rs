use crate::shared::form::FormFields;

pub const PREPARE_PATH: &str = "/api/sales/connect/prepare";
pub const SEND_PATH: &str = "/api/sales/connect/send";

/// Final email as edited by the visitor in the preview box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailRequest {
    pub subject: String,
    pub body: String,
}

impl SendEmailRequest {
    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.push("subject", self.subject.clone());
        fields.push("body", self.body.clone());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_fields() {
        let req = SendEmailRequest {
            subject: "Lead: ACME 14".into(),
            body: "Hello".into(),
        };
        let fields = req.fields();
        assert_eq!(fields.get("subject"), Some("Lead: ACME 14"));
        assert_eq!(fields.get("body"), Some("Hello"));
    }
}
