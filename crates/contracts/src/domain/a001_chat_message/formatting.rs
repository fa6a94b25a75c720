//! Display heuristics for assistant text.
//!
//! Best-effort conveniences: nothing here validates content, it only makes
//! long answers easier to scan and harvests a quoted price for the sales
//! hand-off form.

use once_cell::sync::Lazy;
use regex::Regex;

const BULLET: &str = "• ";

static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:(?:₹|Rs\.?\s?|INR\s?)\s?[0-9][0-9,]*(?:\.[0-9]{1,2})?|(?:USD|\$)\s?[0-9][0-9,]*(?:\.[0-9]{1,2})?)",
    )
    .expect("price pattern is valid")
});

/// Reformat assistant text into bullet lines.
///
/// Text with three or more lines keeps its own line structure; anything
/// shorter is split into sentences. Returns the input unchanged when it does
/// not break into at least two meaningful sentences.
pub fn format_bullets(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() > 2 {
        return lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| line.chars().count() > 5)
            .filter_map(|line| {
                let line = strip_list_marker(line).trim();
                if line.is_empty() {
                    return None;
                }
                let mut line = line.to_string();
                if !line.ends_with(['.', '!', '?', ':']) {
                    line.push('.');
                }
                Some(format!("{BULLET}{line}"))
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let sentences: Vec<&str> = split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > 15)
        .collect();

    if sentences.len() <= 1 {
        return text.to_string();
    }

    let last = sentences.len() - 1;
    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let mut line = strip_bullet(sentence).trim().to_string();
            let terminated = if i == last {
                line.ends_with(['.', '!', '?'])
            } else {
                line.ends_with('.')
            };
            if !terminated {
                line.push('.');
            }
            format!("{BULLET}{line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First currency-looking token in `text`, or an empty string.
pub fn extract_price(text: &str) -> String {
    PRICE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Split on ". " or "; " when the next character is an ASCII capital.
/// The separator itself is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i + 2 < bytes.len() {
        let is_separator = matches!(bytes[i], b'.' | b';')
            && bytes[i + 1] == b' '
            && bytes[i + 2].is_ascii_uppercase();
        if is_separator {
            parts.push(&text[start..i]);
            start = i + 2;
            i += 2;
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Leading list decoration: dashes, stars, bullets, numbering, whitespace.
fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        matches!(c, '-' | '*' | '•' | '+' | '.' | ')') || c.is_ascii_digit() || c.is_whitespace()
    })
}

fn strip_bullet(sentence: &str) -> &str {
    match sentence.strip_prefix(['-', '*', '•']) {
        Some(rest) => rest.trim_start(),
        None => sentence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_keeps_segments() {
        let text = "Highlights\n- Bright OLED display\n* Long battery life!\nok\n3) Ships with charger";
        let formatted = format_bullets(text);
        assert_eq!(
            formatted,
            "• Highlights.\n• Bright OLED display.\n• Long battery life!\n• Ships with charger."
        );
        // "ok" is the only segment of five characters or less
        assert_eq!(formatted.lines().count(), 4);
        assert!(formatted.lines().all(|l| l.starts_with(BULLET)));
    }

    #[test]
    fn test_multiline_colon_is_terminal() {
        let formatted = format_bullets("Key features:\nWater resistant body\nTwo year warranty");
        assert_eq!(
            formatted,
            "• Key features:\n• Water resistant body.\n• Two year warranty."
        );
    }

    #[test]
    fn test_sentence_split() {
        assert_eq!(
            format_bullets("This model supports fast charging. Would you like the price?"),
            "• This model supports fast charging.\n• Would you like the price?"
        );
        assert_eq!(
            format_bullets("Battery lasts all day; Charging takes about an hour"),
            "• Battery lasts all day.\n• Charging takes about an hour."
        );
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(format_bullets("Yes."), "Yes.");
        assert_eq!(format_bullets("Hello there. Ok then"), "Hello there. Ok then");
        assert_eq!(format_bullets(""), "");
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        let text = "Prices start at 499 dollars. and go up with storage options";
        assert_eq!(format_bullets(text), text);
    }

    #[test]
    fn test_extract_price_variants() {
        assert_eq!(extract_price("It is ₹59,990 at launch"), "₹59,990");
        assert_eq!(extract_price("Now only $1,299.99 this week"), "$1,299.99");
        assert_eq!(extract_price("Listed at USD 499 in stores"), "USD 499");
        assert_eq!(extract_price("Offer: Rs. 2,500 off"), "Rs. 2,500");
        assert_eq!(extract_price("About INR 45000.5 total"), "INR 45000.5");
        assert_eq!(extract_price("usd 20"), "usd 20");
    }

    #[test]
    fn test_extract_price_first_match_or_empty() {
        assert_eq!(extract_price("was $10 now ₹5"), "$10");
        assert_eq!(extract_price("No pricing information available."), "");
    }
}
