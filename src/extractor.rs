//! Article extraction from exported document HTML.
//!
//! This module contains [`Extractor`], which turns the HTML export of a
//! shared document into an [`Article`], and the [`extract`] /
//! [`extract_bytes`] shorthands.
//!
//! ## Example
//!
//! ```rust
//! use publishguard::Extractor;
//!
//! let html = r#"
//!     <html>
//!     <head><title>Fallback title</title></head>
//!     <body>
//!         <h1>Trail Shoe Review</h1>
//!         <h2>Fit</h2>
//!         <p>The <b>toe box</b> is roomy.</p>
//!         <p><a href="https://drive.google.com/file/d/abc/view">IMAGE 1</a> Alt tag: "Side view"</p>
//!     </body>
//!     </html>
//! "#;
//!
//! let extractor = Extractor::new("https://docs.google.com/document/d/abc/edit", html)?;
//! let article = extractor.extract();
//!
//! assert_eq!(article.title, "Trail Shoe Review");
//! assert_eq!(article.h2_count, 1);
//! assert_eq!(article.images[0].alt_text, "Side view");
//! # Ok::<(), publishguard::PublishGuardError>(())
//! ```

use crate::{
    article::{Article, ImageRef, LinkRef},
    classify::{is_drive_file_link, looks_like_image_link},
    constants::{
        is_block_element, is_bold_element, is_non_content_element, ALT_TAG_MARKER, SELECTORS,
        UNTITLED_ARTICLE,
    },
    error::{PublishGuardError, Result},
    normalize::normalize_url,
    utils::{
        collapse_whitespace, count_words, find_after_ignore_case, is_blank, plain_text,
        round_to_hundredths,
    },
};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Extract an [`Article`] from an HTML string.
pub fn extract(source_url: &str, html: &str) -> Result<Article> {
    Ok(Extractor::new(source_url, html)?.extract())
}

/// Extract an [`Article`] from raw HTML bytes as delivered by a fetch client.
pub fn extract_bytes(source_url: &str, html: &[u8]) -> Result<Article> {
    Ok(Extractor::from_bytes(source_url, html)?.extract())
}

/// Parsed document ready for extraction.
///
/// Construction validates the source URL and parses the markup; the parser is
/// lenient, so malformed tags degrade instead of failing.
/// [`Extractor::extract`] itself cannot fail.
pub struct Extractor {
    document: Html,
    source_url: String,
}

impl Extractor {
    /// Parse `html` exported from `source_url`.
    ///
    /// # Errors
    /// [`PublishGuardError::InvalidInput`] when `source_url` is blank.
    pub fn new(source_url: &str, html: &str) -> Result<Self> {
        validate_source_url(source_url)?;

        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!(
                source_url,
                tolerated = document.errors.len(),
                "recovered from malformed markup"
            );
        }

        Ok(Self {
            document,
            source_url: source_url.to_string(),
        })
    }

    /// Parse raw HTML bytes.
    ///
    /// # Errors
    /// [`PublishGuardError::InvalidInput`] when `source_url` is blank,
    /// [`PublishGuardError::ParseError`] when the bytes are not UTF-8.
    pub fn from_bytes(source_url: &str, html: &[u8]) -> Result<Self> {
        validate_source_url(source_url)?;
        let html = std::str::from_utf8(html).map_err(|e| {
            PublishGuardError::ParseError(format!("document is not valid UTF-8: {}", e))
        })?;
        Self::new(source_url, html)
    }

    /// Build the article model.
    pub fn extract(&self) -> Article {
        let body = self.body();
        let body_html = body.map(|b| b.inner_html()).unwrap_or_default();

        let title = self.title();
        let images = self.images();
        let links = self.links();

        let body_text = body.map(plain_text).unwrap_or_default();
        let word_count = count_words(&body_text);
        let h2_count = self.document.select(&SELECTORS.h2).count();
        let bold_words = body.map(bold_word_count).unwrap_or(0);
        let bold_text_percentage = bold_percentage(bold_words, word_count);

        debug!(
            source_url = %self.source_url,
            images = images.len(),
            links = links.len(),
            h2_count,
            bold_words,
            "collected article statistics"
        );
        info!(source_url = %self.source_url, word_count, "extracted article");

        Article {
            source_url: self.source_url.clone(),
            title,
            body_html,
            images,
            links,
            word_count,
            h2_count,
            bold_text_percentage,
        }
    }

    fn body(&self) -> Option<ElementRef<'_>> {
        self.document.select(&SELECTORS.body).next()
    }

    /// First `<h1>` if it has text, otherwise `<title>`, otherwise the
    /// placeholder.
    fn title(&self) -> String {
        let first_text = |selector: &Selector| {
            self.document
                .select(selector)
                .next()
                .map(|el| collapse_whitespace(&plain_text(el)))
                .filter(|text| !text.is_empty())
        };

        first_text(&SELECTORS.h1)
            .or_else(|| first_text(&SELECTORS.title))
            .unwrap_or_else(|| UNTITLED_ARTICLE.to_string())
    }

    /// `<img>` elements, then Drive links standing in for images that the
    /// export didn't embed.
    fn images(&self) -> Vec<ImageRef> {
        let mut images: Vec<ImageRef> = self
            .document
            .select(&SELECTORS.img)
            .map(|img| {
                let src = normalize_url(img.value().attr("src").unwrap_or_default());
                ImageRef::new(src, img.value().attr("alt").unwrap_or_default())
            })
            .collect();

        let recovered = self.document.select(&SELECTORS.anchor).filter_map(|anchor| {
            let href = normalize_url(anchor.value().attr("href").unwrap_or_default());
            if !is_drive_file_link(&href) || !looks_like_image_link(&anchor_text(anchor)) {
                return None;
            }
            Some(ImageRef::new(href, neighbor_alt_text(anchor).unwrap_or_default()))
        });
        images.extend(recovered);

        images
    }

    fn links(&self) -> Vec<LinkRef> {
        self.document
            .select(&SELECTORS.anchor)
            .map(|anchor| {
                let href = normalize_url(anchor.value().attr("href").unwrap_or_default());
                LinkRef::new(href, anchor_text(anchor))
            })
            .collect()
    }
}

pub(crate) fn validate_source_url(source_url: &str) -> Result<()> {
    if is_blank(source_url) {
        return Err(PublishGuardError::InvalidInput(
            "Source URL is required.".to_string(),
        ));
    }
    Ok(())
}

fn anchor_text(anchor: ElementRef<'_>) -> String {
    plain_text(anchor).trim().to_string()
}

/// Alt text written beside an exported image link, e.g.
/// `IMAGE 1 Alt tag: "Red trail shoe"`.
///
/// Only the text between the anchor and the next link or block boundary is
/// considered. Without a marker there, the element right after that run is
/// used when it starts with the marker.
fn neighbor_alt_text(anchor: ElementRef<'_>) -> Option<String> {
    let (trailing, next) = text_after_anchor(anchor);
    if find_after_ignore_case(&trailing, ALT_TAG_MARKER).is_some() {
        return alt_text_after_marker(&trailing);
    }

    let next_text = plain_text(next?);
    if !next_text
        .trim_start()
        .to_ascii_lowercase()
        .starts_with(ALT_TAG_MARKER)
    {
        return None;
    }
    alt_text_after_marker(&next_text)
}

/// Text following `anchor` up to the next link or block boundary, climbing
/// out of inline wrappers such as `<span>`, and the element that ended it.
/// When the enclosing block runs out, that element is the block's next
/// sibling.
fn text_after_anchor<'a>(anchor: ElementRef<'a>) -> (String, Option<ElementRef<'a>>) {
    let mut text = String::new();
    let mut node = anchor;
    loop {
        for sibling in node.next_siblings() {
            if let Some(element) = ElementRef::wrap(sibling) {
                if ends_alt_fragment(element) {
                    return (text, Some(element));
                }
                text.push_str(&plain_text(element));
            } else if let Some(chunk) = sibling.value().as_text() {
                text.push_str(chunk);
            }
        }

        match node.parent().and_then(ElementRef::wrap) {
            Some(parent) if !is_block_element(parent.value().name()) => node = parent,
            Some(block) => return (text, block.next_siblings().find_map(ElementRef::wrap)),
            None => return (text, None),
        }
    }
}

fn ends_alt_fragment(element: ElementRef<'_>) -> bool {
    let name = element.value().name();
    name.eq_ignore_ascii_case("a")
        || is_block_element(name)
        || element.select(&SELECTORS.anchor).next().is_some()
}

/// Text after the marker. A quoted value yields only what is inside the
/// quotes.
fn alt_text_after_marker(text: &str) -> Option<String> {
    let start = find_after_ignore_case(text, ALT_TAG_MARKER)?;
    let rest = text[start..].trim_start();

    let alt = match rest.strip_prefix(is_quote) {
        Some(quoted) => quoted.split(is_quote).next().unwrap_or_default(),
        None => rest,
    };

    let alt = collapse_whitespace(alt);
    (!alt.is_empty()).then_some(alt)
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\u{201c}' | '\u{201d}')
}

/// Words inside outermost `<b>`/`<strong>` elements. Nested bold markup is
/// counted once; bold inside script-like elements is not content.
fn bold_word_count(body: ElementRef<'_>) -> usize {
    body.select(&SELECTORS.bold)
        .filter(|el| {
            !el.ancestors().filter_map(ElementRef::wrap).any(|ancestor| {
                let name = ancestor.value().name();
                is_bold_element(name) || is_non_content_element(name)
            })
        })
        .map(|el| count_words(&plain_text(el)))
        .sum()
}

fn bold_percentage(bold_words: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let share = bold_words as f64 * 100.0 / word_count as f64;
    round_to_hundredths(share.min(100.0))
}
