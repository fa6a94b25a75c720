//! Pragmatic contact checks. They catch typos, not fraud.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s\-()]{7,}$").expect("phone pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Optional `+`, a leading digit, then at least seven digits or separators.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@shop.co.in"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("98765 43210"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("(555) 1234567"));
        assert!(!is_valid_phone("+ 9876543210"));
        assert!(!is_valid_phone(""));
    }
}
