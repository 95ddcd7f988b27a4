//! Text helpers shared by the extractor and the payload builder.

use crate::constants::{is_block_element, is_non_content_element};
use scraper::ElementRef;

/// `true` for empty strings and strings made only of whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collapse every whitespace run to one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Flatten an element to its text content.
///
/// Entities are already decoded by the parser. Script and style content is
/// skipped, and block-level boundaries insert a space so that adjacent
/// paragraphs don't fuse into one word. Inline boundaries insert nothing.
pub fn plain_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if is_non_content_element(name) {
        return;
    }

    let block = is_block_element(name);
    if block {
        out.push(' ');
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }

    if block {
        out.push(' ');
    }
}

/// Keep at most `max_chars` characters, trimming the result.
///
/// Text that already fits is returned as is.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    truncated.trim().to_string()
}

/// Round to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// ASCII case-insensitive search returning the byte offset just past `needle`.
pub fn find_after_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let lowered = haystack.to_ascii_lowercase();
    lowered
        .find(&needle.to_ascii_lowercase())
        .map(|index| index + needle.len())
}
