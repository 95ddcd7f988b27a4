//! End-to-end analysis: fetch, extract, validate, score, build payload.
//!
//! [`Analyzer`] only sequences the other components. Its collaborators, the
//! [`DocumentSource`] that supplies HTML and the [`Publisher`] that receives
//! finished articles, are passed in explicitly.
//!
//! ## Example
//!
//! ```rust
//! use publishguard::{Analyzer, ReadinessStatus, RuleOptions, StaticSource};
//!
//! let html = r#"<html><body>
//!     <h1>Trail Shoes</h1>
//!     <h2>Fit</h2><h2>Grip</h2>
//!     <p>Try the <a href="https://shop.example.com/products/trail-1">Trail One</a>.</p>
//!     <img src="https://lh3.googleusercontent.com/a" alt="Side view">
//!     <img src="https://lh3.googleusercontent.com/b" alt="Sole">
//! </body></html>"#;
//!
//! let analyzer = Analyzer::new(StaticSource::new(html)).with_options(RuleOptions::default());
//! let analysis = analyzer.analyze("https://docs.google.com/document/d/abc/edit")?;
//!
//! assert!(analysis.issues.is_empty());
//! assert_eq!(analysis.score.value, 100);
//! assert_eq!(analysis.score.status, ReadinessStatus::Ready);
//! assert_eq!(analysis.payload.title, "Trail Shoes");
//! # Ok::<(), publishguard::PublishGuardError>(())
//! ```

use crate::{
    article::Article,
    error::Result,
    extractor::{validate_source_url, Extractor},
    issue::Issue,
    options::RuleOptions,
    payload::{build_payload, PublishPayload},
    publish::{Publisher, UploadResult},
    rules::RuleSet,
    scoring::{score, Score},
    source::{export_url, DocumentSource, UnavailableSource},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Everything one analysis pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub article: Article,
    pub issues: Vec<Issue>,
    #[serde(flatten)]
    pub score: Score,
    pub payload: PublishPayload,
}

/// Analysis plus the publisher's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub analysis: Analysis,
    pub result: UploadResult,
}

/// Runs the extraction and validation pipeline.
#[derive(Debug, Clone)]
pub struct Analyzer<S> {
    source: S,
    rules: RuleSet,
    options: RuleOptions,
}

impl Analyzer<UnavailableSource> {
    /// Analyzer without a document source; only the `*_html` and
    /// `analyze_article` entry points are useful.
    pub fn offline() -> Self {
        Self::new(UnavailableSource::new("no document source configured"))
    }
}

impl<S> Analyzer<S> {
    /// Standard rules and default options.
    pub fn new(source: S) -> Self {
        Self {
            source,
            rules: RuleSet::standard(),
            options: RuleOptions::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate, score and project an already extracted article.
    pub fn analyze_article(&self, article: Article) -> Analysis {
        let issues = self.rules.validate(&article, &self.options);
        let score = score(&issues);
        let payload = build_payload(&article);

        info!(
            source_url = %article.source_url,
            issues = issues.len(),
            score = score.value,
            status = ?score.status,
            "analysis completed"
        );

        Analysis {
            article,
            issues,
            score,
            payload,
        }
    }

    /// Analyze HTML the caller already fetched.
    pub fn analyze_html(&self, source_url: &str, html: &str) -> Result<Analysis> {
        let article = Extractor::new(source_url, html)?.extract();
        Ok(self.analyze_article(article))
    }

    /// Analyze raw HTML bytes the caller already fetched.
    pub fn analyze_bytes(&self, source_url: &str, html: &[u8]) -> Result<Analysis> {
        let article = Extractor::from_bytes(source_url, html)?.extract();
        Ok(self.analyze_article(article))
    }
}

impl<S: DocumentSource> Analyzer<S> {
    /// Fetch the export of `source_url` from the source and analyze it.
    pub fn analyze(&self, source_url: &str) -> Result<Analysis> {
        validate_source_url(source_url)?;

        let export = export_url(source_url);
        debug!(source_url, export_url = %export, "fetching document");
        let html = self.source.fetch_html(&export).map_err(|e| {
            warn!(source_url, error = %e, "document fetch failed");
            e
        })?;

        self.analyze_html(source_url, &html)
    }

    /// Analyze `source_url` and hand the result to `publisher`.
    ///
    /// Publishing is attempted whatever the readiness status; callers that
    /// want to gate on it inspect `analysis.score` first or use
    /// [`analyze`](Self::analyze) directly.
    pub fn upload<P: Publisher + ?Sized>(&self, source_url: &str, publisher: &P) -> Result<Upload> {
        let analysis = self.analyze(source_url)?;
        let result = publisher.publish(&analysis.article, &analysis.payload);
        if result.success {
            info!(source_url, message = %result.message, "article published");
        } else {
            warn!(source_url, message = %result.message, "publish failed");
        }

        Ok(Upload { analysis, result })
    }
}
