//! Compiled patterns, selectors and fixed literals shared across the crate.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

/// Title used when neither an `<h1>` nor a `<title>` carries text.
pub const UNTITLED_ARTICLE: &str = "Untitled Article";

/// Marker that precedes alt text written next to an exported image link.
pub const ALT_TAG_MARKER: &str = "alt tag:";

/// Maximum excerpt length, in characters.
pub const EXCERPT_MAX_CHARS: usize = 160;

/// Elements whose boundaries separate words when flattening markup to text.
pub const BLOCK_ELEMENTS: [&str; 37] = [
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "br",
    "caption",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Elements whose text never counts as article content.
pub const NON_CONTENT_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// URL and text patterns used by the classifiers and the normalizer.
pub struct Patterns {
    pub google_redirect: Regex,
    pub drive_hosted: Regex,
    pub public_access: Regex,
    pub product_link: Regex,
    pub drive_file_link: Regex,
    pub image_marker: Regex,
}

pub static PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    google_redirect: Regex::new(r"(?i)www\.google\.com/url\?").unwrap(),
    drive_hosted: Regex::new(r"(?i)drive\.google\.com|googleusercontent\.com").unwrap(),
    public_access: Regex::new(r"(?i)googleusercontent\.com|export=view|uc\?export").unwrap(),
    product_link: Regex::new(r"(?i)/products/|variant=|/dp/|/gp/").unwrap(),
    drive_file_link: Regex::new(r"(?i)drive\.google\.com/(?:file|open)").unwrap(),
    image_marker: Regex::new(r"(?i)^\s*IMAGE").unwrap(),
});

/// Selectors for the elements the extractor walks.
pub struct Selectors {
    pub body: Selector,
    pub title: Selector,
    pub h1: Selector,
    pub h2: Selector,
    pub img: Selector,
    pub anchor: Selector,
    pub bold: Selector,
}

pub static SELECTORS: Lazy<Selectors> = Lazy::new(|| Selectors {
    body: Selector::parse("body").unwrap(),
    title: Selector::parse("title").unwrap(),
    h1: Selector::parse("h1").unwrap(),
    h2: Selector::parse("h2").unwrap(),
    img: Selector::parse("img").unwrap(),
    anchor: Selector::parse("a").unwrap(),
    bold: Selector::parse("b, strong").unwrap(),
});

pub fn is_block_element(name: &str) -> bool {
    BLOCK_ELEMENTS
        .iter()
        .any(|block| block.eq_ignore_ascii_case(name))
}

pub fn is_non_content_element(name: &str) -> bool {
    NON_CONTENT_ELEMENTS
        .iter()
        .any(|skip| skip.eq_ignore_ascii_case(name))
}

pub fn is_bold_element(name: &str) -> bool {
    name.eq_ignore_ascii_case("b") || name.eq_ignore_ascii_case("strong")
}
