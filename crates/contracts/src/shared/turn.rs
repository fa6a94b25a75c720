//! Request sequencing for overlapping async calls.
//!
//! A handler takes a [`TurnToken`] before awaiting a response and checks it
//! afterwards. Once the counter has moved on (a reset, or a newer request of
//! the same kind), the late response is dropped instead of overwriting
//! fresher UI state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnToken(u64);

#[derive(Debug, Clone, Default)]
pub struct TurnCounter {
    current: u64,
}

impl TurnCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for work that belongs to the current generation.
    pub fn current(&self) -> TurnToken {
        TurnToken(self.current)
    }

    /// Start a new generation; every previously issued token becomes stale.
    pub fn advance(&mut self) -> TurnToken {
        self.current += 1;
        TurnToken(self.current)
    }

    pub fn is_current(&self, token: TurnToken) -> bool {
        token.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_of_same_generation_stay_valid() {
        let counter = TurnCounter::new();
        let a = counter.current();
        let b = counter.current();
        assert!(counter.is_current(a));
        assert!(counter.is_current(b));
    }

    #[test]
    fn test_advance_invalidates_older_tokens() {
        let mut counter = TurnCounter::new();
        let first = counter.advance();
        let second = counter.advance();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
