//! Which lead-form answers are still wanted.
//!
//! Closing the form invalidates everything in flight. A new preview only
//! supersedes older previews; a send or a summary started earlier still
//! lands.

use crate::shared::turn::{TurnCounter, TurnToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadCall {
    Preview,
    Send,
    Summary,
}

/// Issued when a call starts, checked when its answer arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTicket {
    form: TurnToken,
    preview: Option<TurnToken>,
}

#[derive(Debug, Clone, Default)]
pub struct LeadSequencer {
    form: TurnCounter,
    previews: TurnCounter,
}

impl LeadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, call: LeadCall) -> LeadTicket {
        let preview = match call {
            LeadCall::Preview => Some(self.previews.advance()),
            LeadCall::Send | LeadCall::Summary => None,
        };
        LeadTicket {
            form: self.form.current(),
            preview,
        }
    }

    /// The form was closed; nothing started so far may touch it.
    pub fn close(&mut self) {
        self.form.advance();
        self.previews.advance();
    }

    pub fn is_current(&self, ticket: LeadTicket) -> bool {
        self.form.is_current(ticket.form)
            && ticket
                .preview
                .map_or(true, |token| self.previews.is_current(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_survives_a_later_preview() {
        let mut seq = LeadSequencer::new();
        let send = seq.begin(LeadCall::Send);
        let summary = seq.begin(LeadCall::Summary);
        let preview = seq.begin(LeadCall::Preview);
        assert!(seq.is_current(send));
        assert!(seq.is_current(summary));
        assert!(seq.is_current(preview));
    }

    #[test]
    fn test_newer_preview_supersedes_older() {
        let mut seq = LeadSequencer::new();
        let first = seq.begin(LeadCall::Preview);
        let second = seq.begin(LeadCall::Preview);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_close_drops_everything_in_flight() {
        let mut seq = LeadSequencer::new();
        let calls = [
            seq.begin(LeadCall::Preview),
            seq.begin(LeadCall::Send),
            seq.begin(LeadCall::Summary),
        ];
        seq.close();
        assert!(calls.iter().all(|t| !seq.is_current(*t)));

        let reopened = seq.begin(LeadCall::Send);
        assert!(seq.is_current(reopened));
    }
}
