//! Content-quality rules.
//!
//! A [`Rule`] is a named, pure function from an [`Article`] and
//! [`RuleOptions`] to at most one [`Issue`]. A [`RuleSet`] is an ordered
//! registry of rules; validation runs every rule and collects whatever they
//! report. Rules never see each other's output.
//!
//! ## Example
//!
//! ```rust
//! use publishguard::{extract, IssueCode, RuleOptions, RuleSet};
//!
//! let html = r#"<img src="https://drive.google.com/uc?export=view&id=1" alt="">"#;
//! let article = extract("https://docs.google.com/document/d/abc", html).unwrap();
//!
//! let issues = RuleSet::standard().validate(&article, &RuleOptions::default());
//! let codes: Vec<IssueCode> = issues.iter().map(|issue| issue.code).collect();
//!
//! assert!(codes.contains(&IssueCode::ImagesTooFew));
//! assert!(codes.contains(&IssueCode::MissingAltText));
//! assert!(!codes.contains(&IssueCode::ImageNotOnGoogleDrive));
//! ```
//!
//! ## Custom rules
//!
//! ```rust
//! use publishguard::{Article, Issue, IssueCode, Rule, RuleOptions, RuleSet};
//!
//! fn no_title(article: &Article, options: &RuleOptions) -> Option<Issue> {
//!     (article.title == "Untitled Article").then(|| {
//!         let code = IssueCode::MissingH2Headings;
//!         Issue::new(code, options.severity_of(code), "Document has no heading.")
//!     })
//! }
//!
//! let rules = RuleSet::empty().with_rule(Rule::new("no-title", no_title));
//! assert_eq!(rules.len(), 1);
//! ```

use crate::{
    article::Article,
    issue::{Issue, IssueCode},
    options::RuleOptions,
};
use tracing::trace;

/// Signature every rule implements.
pub type RuleFn = fn(&Article, &RuleOptions) -> Option<Issue>;

/// A named validation rule.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    check: RuleFn,
}

impl Rule {
    pub const fn new(name: &'static str, check: RuleFn) -> Self {
        Self { name, check }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn validate(&self, article: &Article, options: &RuleOptions) -> Option<Issue> {
        (self.check)(article, options)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The built-in rule catalogue, in evaluation order.
pub const STANDARD_RULES: [Rule; 9] = [
    Rule::new("images-too-few", images_too_few),
    Rule::new("images-too-many", images_too_many),
    Rule::new("image-drive-hosting", image_not_on_drive),
    Rule::new("image-public-access", image_not_public),
    Rule::new("image-alt-text", missing_alt_text),
    Rule::new("product-links-too-few", product_links_too_few),
    Rule::new("product-links-too-many", product_links_too_many),
    Rule::new("h2-headings", missing_h2_headings),
    Rule::new("bold-ratio", excessive_bold_text),
];

/// Ordered collection of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Every built-in rule.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// No rules; validation always yields nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule and collect what fires. No rule short-circuits another.
    pub fn validate(&self, article: &Article, options: &RuleOptions) -> Vec<Issue> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let issue = rule.validate(article, options)?;
                trace!(rule = rule.name(), code = %issue.code, "rule fired");
                Some(issue)
            })
            .collect()
    }
}

fn issue(options: &RuleOptions, code: IssueCode, message: String) -> Issue {
    Issue::new(code, options.severity_of(code), message)
}

fn images_too_few(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let count = article.images.len();
    (count < options.min_images).then(|| {
        issue(
            options,
            IssueCode::ImagesTooFew,
            format!(
                "Article has {} images. Minimum is {}.",
                count, options.min_images
            ),
        )
    })
}

fn images_too_many(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let count = article.images.len();
    (count > options.max_images).then(|| {
        issue(
            options,
            IssueCode::ImagesTooMany,
            format!(
                "Article has {} images. Maximum is {}.",
                count, options.max_images
            ),
        )
    })
}

fn image_not_on_drive(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let offenders = article
        .images
        .iter()
        .filter(|image| !image.is_google_drive_hosted)
        .count();
    (offenders > 0).then(|| {
        issue(
            options,
            IssueCode::ImageNotOnGoogleDrive,
            format!("{} image(s) are not hosted on Google Drive.", offenders),
        )
    })
}

fn image_not_public(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let offenders = article
        .images
        .iter()
        .filter(|image| !image.is_publicly_accessible)
        .count();
    (offenders > 0).then(|| {
        issue(
            options,
            IssueCode::ImageNotPublic,
            format!("{} image(s) may not be publicly accessible.", offenders),
        )
    })
}

fn missing_alt_text(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let offenders = article
        .images
        .iter()
        .filter(|image| !image.has_alt_text())
        .count();
    (offenders > 0).then(|| {
        issue(
            options,
            IssueCode::MissingAltText,
            format!("{} image(s) are missing alt text.", offenders),
        )
    })
}

fn product_links_too_few(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let count = article.product_link_count();
    (count < options.min_product_links).then(|| {
        issue(
            options,
            IssueCode::ProductLinksTooFew,
            format!(
                "Article has {} product links. Minimum is {}.",
                count, options.min_product_links
            ),
        )
    })
}

fn product_links_too_many(article: &Article, options: &RuleOptions) -> Option<Issue> {
    let count = article.product_link_count();
    (count > options.max_product_links).then(|| {
        issue(
            options,
            IssueCode::ProductLinksTooMany,
            format!(
                "Article has {} product links. Maximum is {}.",
                count, options.max_product_links
            ),
        )
    })
}

fn missing_h2_headings(article: &Article, options: &RuleOptions) -> Option<Issue> {
    (article.h2_count < options.min_h2_headings).then(|| {
        issue(
            options,
            IssueCode::MissingH2Headings,
            format!(
                "Article has {} H2 headings. Minimum is {}.",
                article.h2_count, options.min_h2_headings
            ),
        )
    })
}

fn excessive_bold_text(article: &Article, options: &RuleOptions) -> Option<Issue> {
    (article.bold_text_percentage > options.max_bold_percentage).then(|| {
        issue(
            options,
            IssueCode::ExcessiveBoldText,
            format!(
                "Bold text is {}% of the article. Maximum is {}%.",
                article.bold_text_percentage, options.max_bold_percentage
            ),
        )
    })
}
