/// Running text of a continuous recognition session.
///
/// Final results are kept for the whole session; interim results only live
/// until the next result event.
#[derive(Debug, Clone, Default)]
pub struct SpeechTranscript {
    finals: String,
}

impl SpeechTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result event (`(is_final, transcript)` pairs starting at the
    /// event's result index) and return the text for the composer.
    pub fn apply<'a, I>(&mut self, results: I) -> String
    where
        I: IntoIterator<Item = (bool, &'a str)>,
    {
        let mut interim = String::new();
        for (is_final, text) in results {
            if is_final {
                self.finals.push_str(text);
                self.finals.push(' ');
            } else {
                interim.push_str(text);
            }
        }
        format!("{}{}", self.finals, interim).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interim_is_replaced_final_is_kept() {
        let mut t = SpeechTranscript::new();
        assert_eq!(t.apply([(false, "what is")]), "what is");
        assert_eq!(t.apply([(true, "what is the price")]), "what is the price");
        assert_eq!(
            t.apply([(false, "in rupees")]),
            "what is the price in rupees"
        );
        assert_eq!(t.apply([(true, "in rupees")]), "what is the price in rupees");
    }
}
