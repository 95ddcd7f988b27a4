//! Article data structures produced by extraction.
//!
//! An [`Article`] is built once per [`extract`](crate::extract) call and never
//! mutated afterwards. Rules, the scorer and the payload builder only read it.
//!
//! ## Example
//!
//! ```rust
//! use publishguard::extract;
//!
//! let html = r#"<html><body>
//!     <h1>Best Running Shoes</h1>
//!     <p>Our pick is the <a href="https://shop.example.com/products/trail-1">Trail One</a>.</p>
//!     <img src="https://lh3.googleusercontent.com/abc" alt="Trail One side view">
//! </body></html>"#;
//!
//! let article = extract("https://docs.google.com/document/d/abc", html).unwrap();
//! assert_eq!(article.title, "Best Running Shoes");
//! assert_eq!(article.images.len(), 1);
//! assert_eq!(article.product_link_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// An image found in the document, either an `<img>` element or an exported
/// Drive link standing in for one.
///
/// The two flags are derived from `url` alone; see
/// [`classify`](crate::classify) for the exact heuristics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Normalized image URL. Empty when the element had no usable `src`.
    pub url: String,

    /// Alt text, empty when absent.
    pub alt_text: String,

    pub is_google_drive_hosted: bool,

    pub is_publicly_accessible: bool,
}

impl ImageRef {
    /// Build an image reference, classifying the URL.
    pub fn new(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            is_google_drive_hosted: crate::classify::is_google_drive_hosted(&url),
            is_publicly_accessible: crate::classify::is_publicly_accessible(&url),
            alt_text: alt_text.into(),
            url,
        }
    }

    pub fn has_alt_text(&self) -> bool {
        !crate::utils::is_blank(&self.alt_text)
    }
}

/// A hyperlink found in the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkRef {
    /// Normalized target URL. Empty when the anchor had no `href`.
    pub url: String,

    /// Anchor text, trimmed.
    pub text: String,

    pub is_product_link: bool,
}

impl LinkRef {
    /// Build a link reference, classifying the URL.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            is_product_link: crate::classify::is_product_link(&url),
            text: text.into(),
            url,
        }
    }
}

/// Structured representation of a fetched document's publishable content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// URL the document was requested for.
    pub source_url: String,

    /// First non-blank `<h1>`, else the `<title>`, else `"Untitled Article"`.
    pub title: String,

    /// Inner markup of `<body>`, unmodified.
    pub body_html: String,

    /// Images in document order: `<img>` elements first, then images
    /// recovered from Drive links.
    pub images: Vec<ImageRef>,

    /// Every `<a>` element in document order.
    pub links: Vec<LinkRef>,

    /// Whitespace-delimited words in the body text.
    pub word_count: usize,

    /// Number of `<h2>` elements.
    pub h2_count: usize,

    /// Share of body words inside `<b>`/`<strong>`, 0 to 100 with two
    /// decimals.
    pub bold_text_percentage: f64,
}

impl Article {
    /// Number of links classified as product links.
    pub fn product_link_count(&self) -> usize {
        self.links.iter().filter(|link| link.is_product_link).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_classifies_url() {
        let image = ImageRef::new("https://drive.google.com/uc?export=view&id=1", "");
        assert!(image.is_google_drive_hosted);
        assert!(image.is_publicly_accessible);
        assert!(!image.has_alt_text());

        let image = ImageRef::new("https://cdn.example.com/a.png", "A shoe");
        assert!(!image.is_google_drive_hosted);
        assert!(!image.is_publicly_accessible);
        assert!(image.has_alt_text());
    }

    #[test]
    fn link_ref_classifies_url() {
        assert!(LinkRef::new("https://shop.example.com/products/1", "Buy").is_product_link);
        assert!(!LinkRef::new("https://example.com/about", "About").is_product_link);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let article = Article {
            source_url: "https://docs.google.com/document/d/1".to_string(),
            title: "Sample".to_string(),
            body_html: "<p>Body</p>".to_string(),
            images: vec![ImageRef::new("https://lh3.googleusercontent.com/a", "Alt")],
            links: vec![],
            word_count: 1,
            h2_count: 0,
            bold_text_percentage: 0.0,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["sourceUrl"], "https://docs.google.com/document/d/1");
        assert_eq!(json["bodyHtml"], "<p>Body</p>");
        assert_eq!(json["h2Count"], 0);
        assert_eq!(json["images"][0]["isGoogleDriveHosted"], true);
        assert_eq!(json["images"][0]["altText"], "Alt");
    }
}
