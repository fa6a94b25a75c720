use serde::{Deserialize, Serialize};

/// Which topic a reference or file belongs to, and therefore which form
/// field names it is posted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSlot {
    /// `/api/init-topic`
    Primary,
    /// `/api/compare/init-topic`, side A
    CompareA,
    /// `/api/compare/init-topic`, side B
    CompareB,
}

impl TopicSlot {
    pub fn file_field(&self) -> &'static str {
        match self {
            TopicSlot::Primary => "pdf",
            TopicSlot::CompareA => "a_pdf",
            TopicSlot::CompareB => "b_pdf",
        }
    }

    fn url_field(&self) -> &'static str {
        match self {
            TopicSlot::Primary => "url",
            TopicSlot::CompareA => "a_url",
            TopicSlot::CompareB => "b_url",
        }
    }

    fn name_field(&self) -> &'static str {
        match self {
            TopicSlot::Primary => "product_name",
            TopicSlot::CompareA => "a_name",
            TopicSlot::CompareB => "b_name",
        }
    }
}

/// Free-text topic reference typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicReference {
    Url(String),
    ProductName(String),
}

impl TopicReference {
    /// Anything starting with `http` is a URL; blank input is no reference.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else if raw.starts_with("http") {
            Some(TopicReference::Url(raw.to_string()))
        } else {
            Some(TopicReference::ProductName(raw.to_string()))
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TopicReference::Url(v) | TopicReference::ProductName(v) => v,
        }
    }

    pub fn field_name(&self, slot: TopicSlot) -> &'static str {
        match self {
            TopicReference::Url(_) => slot.url_field(),
            TopicReference::ProductName(_) => slot.name_field(),
        }
    }
}

/// OCR policy for uploaded PDFs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrMode {
    /// OCR only when the document looks scanned.
    #[default]
    Auto,
    Force,
    Off,
}

impl OcrMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OcrMode::Auto => "auto",
            OcrMode::Force => "force",
            OcrMode::Off => "off",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OcrMode::Auto => "OCR: auto",
            OcrMode::Force => "OCR: always",
            OcrMode::Off => "OCR: off",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "force" => OcrMode::Force,
            "off" => OcrMode::Off,
            _ => OcrMode::Auto,
        }
    }

    pub fn all() -> [OcrMode; 3] {
        [OcrMode::Auto, OcrMode::Force, OcrMode::Off]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference() {
        assert_eq!(TopicReference::parse("   "), None);
        assert_eq!(
            TopicReference::parse(" https://shop.example/acme-14 "),
            Some(TopicReference::Url("https://shop.example/acme-14".into()))
        );
        assert_eq!(
            TopicReference::parse("ACME Laptop 14"),
            Some(TopicReference::ProductName("ACME Laptop 14".into()))
        );
    }

    #[test]
    fn test_field_names_per_slot() {
        let url = TopicReference::parse("http://x.example").unwrap();
        let name = TopicReference::parse("Galaxy S24").unwrap();
        assert_eq!(url.field_name(TopicSlot::Primary), "url");
        assert_eq!(name.field_name(TopicSlot::Primary), "product_name");
        assert_eq!(url.field_name(TopicSlot::CompareA), "a_url");
        assert_eq!(name.field_name(TopicSlot::CompareB), "b_name");
        assert_eq!(TopicSlot::CompareB.file_field(), "b_pdf");
    }

    #[test]
    fn test_ocr_mode_roundtrip_names() {
        for mode in OcrMode::all() {
            assert_eq!(OcrMode::from_str(mode.as_str()), mode);
        }
        assert_eq!(OcrMode::from_str("unknown"), OcrMode::Auto);
    }
}
