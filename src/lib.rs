//! # PublishGuard
//!
//! Content-quality gate for articles drafted in Google Docs.
//!
//! ## Overview
//!
//! PublishGuard takes the HTML export of a shared document, extracts the
//! article it contains, checks it against a configurable set of content
//! rules, and reports a readiness score together with the payload a
//! publishing integration would receive.
//!
//! ## Key Features
//!
//! - **Article Extraction**: title, body markup, images, links, word count,
//!   `<h2>` count and bold-text share
//! - **Redirect Unwrapping**: Google's `www.google.com/url?q=` wrappers are
//!   resolved before any link is classified
//! - **Exported Image Recovery**: `IMAGE 1`-style Drive links are counted as
//!   images, with alt text read from a neighboring `Alt tag:` note
//! - **Configurable Rules**: thresholds and a per-code severity table
//! - **Readiness Score**: severity-weighted score with a
//!   Ready / NeedsReview / Blocked status
//!
//! ## Basic Usage
//!
//! ```rust
//! use publishguard::{Analyzer, IssueCode};
//!
//! let html = r#"<html><body>
//!     <h1>Trail Shoes</h1>
//!     <p><img src="https://drive.google.com/uc?export=view&id=1" alt=""></p>
//! </body></html>"#;
//!
//! let analysis = Analyzer::offline()
//!     .analyze_html("https://docs.google.com/document/d/abc/edit", html)
//!     .unwrap();
//!
//! println!("Score: {} ({:?})", analysis.score.value, analysis.score.status);
//! for issue in &analysis.issues {
//!     println!("{}", issue);
//! }
//! assert!(analysis.issues.iter().any(|i| i.code == IssueCode::MissingAltText));
//! ```
//!
//! ## Step by Step
//!
//! Every stage is usable on its own:
//!
//! ```rust
//! use publishguard::{build_payload, extract, score, RuleOptions, RuleSet};
//!
//! let article = extract("https://docs.google.com/document/d/abc", "<h1>Hi</h1>").unwrap();
//! let issues = RuleSet::standard().validate(&article, &RuleOptions::default());
//! let readiness = score(&issues);
//! let payload = build_payload(&article);
//!
//! assert_eq!(payload.title, "Hi");
//! assert!(readiness.value < 100);
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use publishguard::{extract, PublishGuardError};
//!
//! match extract("   ", "<html></html>") {
//!     Ok(_) => unreachable!(),
//!     Err(PublishGuardError::InvalidInput(message)) => {
//!         eprintln!("Rejected: {}", message);
//!     }
//!     Err(e) => {
//!         eprintln!("Error: {}", e);
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber; the
//! `publishguard` binary installs one filtered by `RUST_LOG`.

mod analyzer;
mod article;
pub mod classify;
mod constants;
mod error;
mod extractor;
mod issue;
mod normalize;
mod options;
mod payload;
mod publish;
mod rules;
mod scoring;
mod source;
mod utils;

// Public exports
pub use analyzer::{Analysis, Analyzer, Upload};
pub use article::{Article, ImageRef, LinkRef};
pub use error::{PublishGuardError, Result};
pub use extractor::{extract, extract_bytes, Extractor};
pub use issue::{Issue, IssueCode, Severity};
pub use normalize::{is_redirect_wrapper, normalize_url};
pub use options::{RuleOptions, RuleOptionsBuilder, SeverityPolicy, SeverityTable};
pub use payload::{build_payload, excerpt, PublishPayload};
pub use publish::{PlaceholderPublisher, Publisher, UploadResult};
pub use rules::{Rule, RuleFn, RuleSet, STANDARD_RULES};
pub use scoring::{score, ReadinessStatus, Score};
pub use source::{export_url, DocumentSource, StaticSource, UnavailableSource};
