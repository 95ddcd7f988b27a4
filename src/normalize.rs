//! Resolution of redirect-wrapped URLs.
//!
//! Google Docs exports wrap every outbound link in a tracking redirect of the
//! form `https://www.google.com/url?q=<target>&sa=D&...`. Classification has
//! to look at the real target, so every `href`/`src` goes through
//! [`normalize_url`] before anything else inspects it.
//!
//! ```rust
//! use publishguard::normalize_url;
//!
//! let wrapped = "https://www.google.com/url?q=https%3A%2F%2Fshop.example.com%2Fproducts%2F1&sa=D";
//! assert_eq!(normalize_url(wrapped), "https://shop.example.com/products/1");
//! assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
//! assert_eq!(normalize_url("   "), "");
//! ```

use crate::constants::PATTERNS;
use crate::utils::is_blank;
use url::form_urlencoded;

/// Resolve a raw `href`/`src` value to the URL it actually points at.
///
/// Blank input yields an empty string. Redirect wrappers carrying a `q`
/// parameter are replaced by the percent-decoded parameter value (`+` is
/// kept as is); nested wrappers are unwrapped until none remain, so the
/// function is idempotent. Anything else is returned unchanged.
pub fn normalize_url(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        if is_blank(&current) {
            return String::new();
        }

        // Each unwrap yields a strict substring's decoding, so this terminates.
        match unwrap_redirect(&current) {
            Some(target) if target != current => current = target,
            _ => return current,
        }
    }
}

/// Returns `true` when the URL is a redirect wrapper `normalize_url` unwraps.
pub fn is_redirect_wrapper(url: &str) -> bool {
    unwrap_redirect(url).is_some()
}

fn unwrap_redirect(href: &str) -> Option<String> {
    if !PATTERNS.google_redirect.is_match(href) {
        return None;
    }

    let (_, query) = href.split_once('?')?;
    // A literal `+` in the target stays a `+`; only percent escapes decode.
    let query = query
        .split('#')
        .next()
        .unwrap_or_default()
        .replace('+', "%2B");

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key.eq_ignore_ascii_case("q"))
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url(" \t\n"), "");
    }

    #[test]
    fn unwraps_google_redirect() {
        let wrapped =
            "https://www.google.com/url?q=https%3A%2F%2Fshop.example.com%2Fproducts%2F1&sa=D";
        assert_eq!(normalize_url(wrapped), "https://shop.example.com/products/1");
    }

    #[test]
    fn unwraps_unencoded_target_and_ignores_other_params() {
        let wrapped = "https://www.google.com/url?sa=D&q=https://example.com/page&ust=123&usg=abc";
        assert_eq!(normalize_url(wrapped), "https://example.com/page");
    }

    #[test]
    fn redirect_match_is_case_insensitive() {
        let wrapped = "HTTPS://WWW.GOOGLE.COM/URL?Q=https%3A%2F%2Fexample.com";
        assert_eq!(normalize_url(wrapped), "https://example.com");
    }

    #[test]
    fn plus_in_target_is_kept() {
        let wrapped = "https://www.google.com/url?q=https://example.com/search?q%3Drunning+shoes%2Bsocks&sa=D";
        assert_eq!(
            normalize_url(wrapped),
            "https://example.com/search?q=running+shoes+socks"
        );
    }

    #[test]
    fn redirect_without_q_is_unchanged() {
        let wrapped = "https://www.google.com/url?sa=D&source=editors";
        assert_eq!(normalize_url(wrapped), wrapped);
        assert!(!is_redirect_wrapper(wrapped));
    }

    #[test]
    fn plain_urls_are_unchanged() {
        let plain = "https://example.com/search?q=shoes";
        assert_eq!(normalize_url(plain), plain);
    }

    #[test]
    fn nested_wrappers_are_fully_unwrapped() {
        let inner = "https://www.google.com/url?q=https%3A%2F%2Fexample.com%2Fproducts%2Fa&sa=D";
        let outer = format!(
            "https://www.google.com/url?q={}&sa=D",
            form_urlencoded::byte_serialize(inner.as_bytes()).collect::<String>()
        );
        assert_eq!(normalize_url(&outer), "https://example.com/products/a");
    }

    #[test]
    fn wrapper_around_blank_target_is_empty() {
        assert_eq!(normalize_url("https://www.google.com/url?q=%20&sa=D"), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in ".*") {
            let once = normalize_url(&s);
            prop_assert_eq!(normalize_url(&once), once.clone());
        }

        #[test]
        fn normalize_is_idempotent_for_wrapped(target in "[a-zA-Z0-9:/%.?=&+ ]{0,40}") {
            let wrapped = format!("https://www.google.com/url?q={}&sa=D", target);
            let once = normalize_url(&wrapped);
            prop_assert_eq!(normalize_url(&once), once.clone());
        }
    }
}
