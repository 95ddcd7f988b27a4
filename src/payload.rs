//! Publish payload derived from an article.

use crate::{
    article::Article,
    constants::EXCERPT_MAX_CHARS,
    utils::{collapse_whitespace, is_blank, plain_text, truncate_chars},
};
use scraper::Html;
use serde::{Deserialize, Serialize};

/// Minimal record handed to the publishing integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPayload {
    pub title: String,
    pub content_html: String,
    /// Plain-text lead of the content, at most 160 characters.
    pub excerpt: String,
}

/// Project an article into its publish payload. No validation happens here.
pub fn build_payload(article: &Article) -> PublishPayload {
    PublishPayload {
        title: article.title.clone(),
        content_html: article.body_html.clone(),
        excerpt: excerpt(&article.body_html, EXCERPT_MAX_CHARS),
    }
}

/// Plain text of `html` with whitespace collapsed, cut to `max_chars`.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    if is_blank(html) {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let text = collapse_whitespace(&plain_text(fragment.root_element()));
    truncate_chars(&text, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn article(body_html: &str) -> Article {
        Article {
            source_url: "https://docs.google.com/document/d/1".to_string(),
            title: "Title".to_string(),
            body_html: body_html.to_string(),
            images: vec![],
            links: vec![],
            word_count: 0,
            h2_count: 0,
            bold_text_percentage: 0.0,
        }
    }

    #[test]
    fn payload_projects_title_and_content() {
        let payload = build_payload(&article("<p>Hello &amp; welcome</p>"));
        assert_eq!(payload.title, "Title");
        assert_eq!(payload.content_html, "<p>Hello &amp; welcome</p>");
        assert_eq!(payload.excerpt, "Hello & welcome");
    }

    #[test]
    fn empty_content_has_empty_excerpt() {
        assert_eq!(build_payload(&article("")).excerpt, "");
        assert_eq!(build_payload(&article("  \n")).excerpt, "");
    }

    #[test]
    fn long_content_is_cut_at_160_characters() {
        let body = format!("<p>{}</p>", "word ".repeat(100));
        let payload = build_payload(&article(&body));
        assert!(payload.excerpt.chars().count() <= 160);
        assert!(payload.excerpt.starts_with("word word"));
        assert!(!payload.excerpt.ends_with(' '));
    }

    #[test]
    fn paragraphs_are_separated() {
        assert_eq!(excerpt("<p>First.</p><p>Second.</p>", 160), "First. Second.");
    }

    #[test]
    fn multibyte_text_is_cut_on_characters() {
        let body = format!("<p>{}</p>", "é".repeat(200));
        let text = excerpt(&body, 160);
        assert_eq!(text.chars().count(), 160);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(build_payload(&article("<p>x</p>"))).unwrap();
        assert_eq!(json["contentHtml"], "<p>x</p>");
        assert_eq!(json["excerpt"], "x");
    }

    proptest! {
        #[test]
        fn excerpt_never_exceeds_limit(body in "[a-zA-Z <>/&;é]{0,400}") {
            prop_assert!(excerpt(&body, 160).chars().count() <= 160);
        }

        #[test]
        fn short_text_is_returned_whole(words in prop::collection::vec("[a-z]{1,8}", 0..15)) {
            let text = words.join(" ");
            let html = format!("<p>{}</p>", text);
            prop_assert!(text.chars().count() <= 160);
            prop_assert_eq!(excerpt(&html, 160), text);
        }
    }
}
