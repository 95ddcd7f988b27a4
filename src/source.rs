//! Where document HTML comes from.
//!
//! Fetching is left to the caller: implement [`DocumentSource`] over whatever
//! HTTP client the application already uses. The crate itself performs no
//! network I/O and never retries.

use crate::error::{PublishGuardError, Result};

const DOCUMENT_PATH_MARKER: &str = "/document/d/";
const EXPORT_MARKER: &str = "/export?";

/// Map a Google Docs editor URL to its HTML export URL.
///
/// URLs that are already export links, or that are not Docs document links
/// at all, come back unchanged.
///
/// ```rust
/// use publishguard::export_url;
///
/// assert_eq!(
///     export_url("https://docs.google.com/document/d/1AbC/edit?usp=sharing"),
///     "https://docs.google.com/document/d/1AbC/export?format=html"
/// );
/// assert_eq!(export_url("https://example.com/post"), "https://example.com/post");
/// ```
pub fn export_url(source_url: &str) -> String {
    let lowered = source_url.to_ascii_lowercase();
    if lowered.contains(EXPORT_MARKER) {
        return source_url.to_string();
    }

    let Some(start) = lowered.find(DOCUMENT_PATH_MARKER) else {
        return source_url.to_string();
    };

    let id_start = start + DOCUMENT_PATH_MARKER.len();
    let rest = &source_url[id_start..];
    let id_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let document_id = &rest[..id_end];
    if document_id.is_empty() {
        return source_url.to_string();
    }

    format!(
        "https://docs.google.com/document/d/{}/export?format=html",
        document_id
    )
}

/// Supplies the raw HTML of an exported document.
pub trait DocumentSource {
    /// Fetch the HTML served at `export_url`.
    fn fetch_html(&self, export_url: &str) -> Result<String>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch_html(&self, export_url: &str) -> Result<String> {
        (**self).fetch_html(export_url)
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn fetch_html(&self, export_url: &str) -> Result<String> {
        (**self).fetch_html(export_url)
    }
}

/// Source that serves one fixed document, for offline runs and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    html: String,
}

impl StaticSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl DocumentSource for StaticSource {
    fn fetch_html(&self, _export_url: &str) -> Result<String> {
        Ok(self.html.clone())
    }
}

/// Source that always fails; useful to exercise error paths.
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DocumentSource for UnavailableSource {
    fn fetch_html(&self, export_url: &str) -> Result<String> {
        Err(PublishGuardError::Source(format!(
            "{}: {}",
            export_url, self.reason
        )))
    }
}
