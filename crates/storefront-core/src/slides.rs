use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left unescaped in a category anchor.
const ANCHOR: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// A promotional slide as published by the slides endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: String,
    pub desktop: SlideImage,
    pub mobile: SlideImage,
    /// Category name whose home-page rail the banner should jump to.
    pub categoria: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
}

/// One responsive variant of a slide. Desktop and mobile are independent
/// uploads; neither is derived from the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideImage {
    pub url: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// A slide normalized into the shape the hero carousel renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub image_desktop: String,
    pub image_mobile: String,
    pub alt_text: String,
    /// Never empty: `"#"` when the banner is decorative only.
    pub link_url: String,
    pub desktop_width: Option<u32>,
    pub desktop_height: Option<u32>,
    pub mobile_width: Option<u32>,
    pub mobile_height: Option<u32>,
}

/// Builds the in-page anchor for a category name: lowercased, whitespace runs
/// collapsed to `-`, anything else outside `[A-Za-z0-9_-]` percent-encoded.
///
/// `"Nike"` becomes `"nike"` and `"New Balance"` becomes `"new-balance"`.
#[must_use]
pub fn category_anchor(name: &str) -> String {
    let lowered = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    utf8_percent_encode(&lowered, ANCHOR).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_lowercases_single_word() {
        assert_eq!(category_anchor("Nike"), "nike");
    }

    #[test]
    fn anchor_hyphenates_whitespace() {
        assert_eq!(category_anchor("  New   Balance "), "new-balance");
    }

    #[test]
    fn anchor_percent_encodes_non_ascii() {
        assert_eq!(category_anchor("Niño"), "ni%C3%B1o");
    }

    #[test]
    fn anchor_escapes_markup_characters() {
        assert_eq!(category_anchor("a<b>\"c"), "a%3Cb%3E%22c");
    }

    #[test]
    fn banner_serializes_camel_case() {
        let banner = Banner {
            id: "1".to_string(),
            image_desktop: "a.jpg".to_string(),
            image_mobile: "b.jpg".to_string(),
            alt_text: "Banner 1".to_string(),
            link_url: "#".to_string(),
            desktop_width: Some(1200),
            desktop_height: Some(500),
            mobile_width: None,
            mobile_height: None,
        };
        let json = serde_json::to_value(&banner).unwrap();
        assert_eq!(json["imageDesktop"], "a.jpg");
        assert_eq!(json["imageMobile"], "b.jpg");
        assert_eq!(json["altText"], "Banner 1");
        assert_eq!(json["linkUrl"], "#");
        assert_eq!(json["desktopWidth"], 1200);
    }
}
