//! Host-supplied page data consumed by the chrome templates.

use serde::{Deserialize, Serialize};

/// One entry in the page's table of contents.
///
/// Supplied in document order by the host's content pipeline; `slug` is
/// the anchor id of the heading element, `depth` its level (1 for the
/// page title, 2 for sections, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub slug: String,
    pub depth: u8,
}

impl Heading {
    pub fn new(text: impl Into<String>, slug: impl Into<String>, depth: u8) -> Self {
        Self {
            text: text.into(),
            slug: slug.into(),
            depth,
        }
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

impl NavLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_serializes_with_expected_keys() {
        let heading = Heading::new("Getting Started", "getting-started", 2);
        let json = serde_json::to_value(&heading).unwrap();
        assert_eq!(json["text"], "Getting Started");
        assert_eq!(json["slug"], "getting-started");
        assert_eq!(json["depth"], 2);
    }

    #[test]
    fn test_nav_link_round_trip() {
        let link = NavLink::new("Blog", "/blog");
        let json = serde_json::to_string(&link).unwrap();
        let back: NavLink = serde_json::from_str(&json).unwrap();
        assert_eq!(back, link);
    }
}
