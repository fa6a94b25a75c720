use crate::domain::a001_chat_message::extract_price;

/// Client-side view of the conversation session.
///
/// The backend keeps the authoritative session keyed by its own cookie; this
/// only tracks what the UI needs to gate the composer, pick the ask endpoint
/// and prefill the sales hand-off form.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSession {
    pub topic_selected: bool,
    pub compare_pair_ready: bool,
    pub compare_mode: bool,
    pub rag_enabled: bool,
    pub product_ref: String,
    pub quoted_price: String,
    pub context_summary: String,
    /// Sidebar history, newest first.
    pub history: Vec<String>,
}

impl Default for TopicSession {
    fn default() -> Self {
        Self {
            topic_selected: false,
            compare_pair_ready: false,
            compare_mode: false,
            rag_enabled: true,
            product_ref: String::new(),
            quoted_price: String::new(),
            context_summary: String::new(),
            history: Vec::new(),
        }
    }
}

impl TopicSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn composer_enabled(&self) -> bool {
        self.topic_selected
    }

    /// Trimmed question when the composer may submit it, `None` otherwise.
    pub fn accept_question(&self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() || !self.topic_selected {
            return None;
        }
        Some(text.to_string())
    }

    /// Comparison endpoint only when the toggle is on and a pair is set up.
    pub fn uses_compare_endpoint(&self) -> bool {
        self.compare_mode && self.compare_pair_ready
    }

    pub fn begin_turn(&mut self, question: &str) {
        self.context_summary = question.to_string();
    }

    /// Remember a price quoted by the assistant, if the text carries one.
    pub fn note_assistant_text(&mut self, text: &str) {
        let price = extract_price(text);
        if !price.is_empty() {
            self.quoted_price = price;
        }
    }

    /// Provisional product reference taken from the topic form before the
    /// server has named the topic.
    pub fn remember_reference(&mut self, candidate: &str) {
        if self.product_ref.is_empty() {
            self.product_ref = candidate.trim().to_string();
        }
    }

    pub fn confirm_topic(&mut self, primary: Option<&str>, history_line: String) {
        self.topic_selected = true;
        if let Some(primary) = primary.filter(|p| !p.trim().is_empty()) {
            self.product_ref = primary.to_string();
        }
        self.push_history(history_line);
    }

    pub fn confirm_compare_pair(&mut self) {
        self.compare_pair_ready = true;
    }

    /// Pairing needs the primary topic first.
    pub fn can_pair(&self) -> bool {
        self.topic_selected
    }

    /// Drop the visible conversation context but keep the topic.
    pub fn start_new_chat(&mut self, time_label: &str) {
        self.quoted_price.clear();
        self.context_summary.clear();
        if self.topic_selected {
            self.push_history(format!("New chat started - {time_label}"));
        }
    }

    /// Full reset: topic, comparison pair, history and sales context.
    pub fn clear(&mut self) {
        self.topic_selected = false;
        self.compare_pair_ready = false;
        self.product_ref.clear();
        self.quoted_price.clear();
        self.context_summary.clear();
        self.history.clear();
    }

    pub fn push_history(&mut self, line: String) {
        self.history.insert(0, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected() -> TopicSession {
        let mut s = TopicSession::new();
        s.confirm_topic(Some("ACME Laptop 14"), "Topic selected: ACME Laptop 14".into());
        s
    }

    #[test]
    fn test_rejects_before_topic_or_blank() {
        let s = TopicSession::new();
        assert_eq!(s.accept_question("What is the price?"), None);
        assert!(!s.composer_enabled());

        let s = selected();
        assert_eq!(s.accept_question("   \n\t"), None);
        assert_eq!(s.accept_question("  What is the price? "), Some("What is the price?".into()));
    }

    #[test]
    fn test_compare_endpoint_needs_toggle_and_pair() {
        let mut s = selected();
        s.compare_mode = true;
        assert!(!s.uses_compare_endpoint());
        s.confirm_compare_pair();
        assert!(s.uses_compare_endpoint());
        s.compare_mode = false;
        assert!(!s.uses_compare_endpoint());
    }

    #[test]
    fn test_clear_resets_flags_regardless_of_state() {
        let mut s = selected();
        s.compare_mode = true;
        s.confirm_compare_pair();
        s.note_assistant_text("It costs $999 today");
        s.clear();
        assert!(!s.topic_selected);
        assert!(!s.compare_pair_ready);
        assert!(!s.composer_enabled());
        assert!(s.product_ref.is_empty());
        assert!(s.quoted_price.is_empty());
        assert!(s.history.is_empty());

        let mut fresh = TopicSession::new();
        fresh.clear();
        assert!(!fresh.topic_selected);
        assert!(!fresh.compare_pair_ready);
    }

    #[test]
    fn test_price_only_overwritten_by_new_price() {
        let mut s = selected();
        s.note_assistant_text("The ACME 14 sells for ₹59,990.");
        s.note_assistant_text("It ships in two days.");
        assert_eq!(s.quoted_price, "₹59,990");
    }

    #[test]
    fn test_reference_prefers_server_primary() {
        let mut s = TopicSession::new();
        s.remember_reference("acme laptop");
        s.remember_reference("something else");
        assert_eq!(s.product_ref, "acme laptop");
        s.confirm_topic(Some("ACME Laptop 14"), "Topic selected".into());
        assert_eq!(s.product_ref, "ACME Laptop 14");
    }

    #[test]
    fn test_new_chat_keeps_topic_and_logs() {
        let mut s = selected();
        s.begin_turn("Battery life?");
        s.start_new_chat("10:15:00");
        assert!(s.topic_selected);
        assert!(s.context_summary.is_empty());
        assert_eq!(s.history[0], "New chat started - 10:15:00");
        assert_eq!(s.history.len(), 2);

        let mut idle = TopicSession::new();
        idle.start_new_chat("10:15:00");
        assert!(idle.history.is_empty());
    }
}
