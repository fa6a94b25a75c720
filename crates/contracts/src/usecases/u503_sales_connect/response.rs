use serde::{Deserialize, Serialize};

/// `data` of `/api/sales/connect/prepare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreparedEmail {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// `data` of `/api/sales/connect/send`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// Mail transport not configured; `info` describes what would be sent.
    DryRun { info: String },
}

impl SendOutcome {
    pub const SENT_TOAST: &'static str =
        "Email sent successfully! The store manager will contact you shortly.";
    pub const DRY_RUN_TOAST: &'static str =
        "Email preview generated successfully! (SMTP not configured - this is a dry run)";

    pub fn toast(&self) -> &'static str {
        match self {
            SendOutcome::Sent => Self::SENT_TOAST,
            SendOutcome::DryRun { .. } => Self::DRY_RUN_TOAST,
        }
    }
}

impl From<SendResult> for SendOutcome {
    fn from(result: SendResult) -> Self {
        if result.status == "sent" {
            SendOutcome::Sent
        } else {
            SendOutcome::DryRun { info: result.info }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sent_status_counts_as_sent() {
        let sent: SendOutcome = serde_json::from_str::<SendResult>(r#"{"status":"sent"}"#)
            .unwrap()
            .into();
        assert_eq!(sent, SendOutcome::Sent);

        let dry: SendOutcome =
            serde_json::from_str::<SendResult>(r#"{"status":"preview","info":"To: m@x.io"}"#)
                .unwrap()
                .into();
        assert_eq!(
            dry,
            SendOutcome::DryRun {
                info: "To: m@x.io".into()
            }
        );
        assert_eq!(dry.toast(), SendOutcome::DRY_RUN_TOAST);

        let odd: SendOutcome = SendResult::default().into();
        assert!(matches!(odd, SendOutcome::DryRun { .. }));
    }
}
