//! Configuration for the validation rule set.
//!
//! This module provides [`RuleOptions`] and [`RuleOptionsBuilder`] for the
//! thresholds the rules check, and [`SeverityTable`] for how severe each
//! finding is.
//!
//! ## Example
//!
//! ```rust
//! use publishguard::{IssueCode, RuleOptions, Severity, SeverityPolicy};
//!
//! // Using default options
//! let options = RuleOptions::default();
//! assert_eq!(options.min_images, 2);
//!
//! // Using builder for custom options
//! let options = RuleOptions::builder()
//!     .min_images(3)
//!     .max_bold_percentage(15.0)
//!     .severity_policy(SeverityPolicy::Strict)
//!     .severity_override(IssueCode::MissingAltText, Severity::Error)
//!     .build();
//!
//! assert_eq!(options.severities.severity_of(IssueCode::ImagesTooFew), Severity::Error);
//! assert_eq!(options.severities.severity_of(IssueCode::MissingAltText), Severity::Error);
//! ```
//!
//! ## Loading from JSON
//!
//! Every field is optional; missing ones take their defaults.
//!
//! ```rust
//! use publishguard::RuleOptions;
//!
//! let options = RuleOptions::from_json(r#"{
//!     "minImages": 1,
//!     "severities": { "policy": "strict", "overrides": { "ImagesTooMany": "Error" } }
//! }"#).unwrap();
//!
//! assert_eq!(options.min_images, 1);
//! assert_eq!(options.max_images, 10);
//! ```

use crate::error::{PublishGuardError, Result};
use crate::issue::{IssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Named severity assignment for every issue code.
///
/// | Code | Advisory | Strict |
/// |---|---|---|
/// | ImagesTooFew | Warning | Error |
/// | ImageNotOnGoogleDrive | Warning | Error |
/// | ProductLinksTooFew | Warning | Error |
/// | ExcessiveBoldText | Warning | Info |
/// | everything else | Warning | Warning |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityPolicy {
    /// Every finding is a warning.
    #[default]
    Advisory,
    /// Missing images, off-Drive images and missing product links block
    /// publishing; heavy bold text is informational.
    Strict,
}

impl SeverityPolicy {
    pub fn severity_of(self, code: IssueCode) -> Severity {
        match self {
            SeverityPolicy::Advisory => Severity::Warning,
            SeverityPolicy::Strict => match code {
                IssueCode::ImagesTooFew
                | IssueCode::ImageNotOnGoogleDrive
                | IssueCode::ProductLinksTooFew => Severity::Error,
                IssueCode::ExcessiveBoldText => Severity::Info,
                IssueCode::ImagesTooMany
                | IssueCode::ImageNotPublic
                | IssueCode::MissingAltText
                | IssueCode::ProductLinksTooMany
                | IssueCode::MissingH2Headings => Severity::Warning,
            },
        }
    }
}

/// Severity lookup keyed by issue code: a base policy plus per-code
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeverityTable {
    pub policy: SeverityPolicy,
    pub overrides: BTreeMap<IssueCode, Severity>,
}

impl SeverityTable {
    pub fn new(policy: SeverityPolicy) -> Self {
        Self {
            policy,
            overrides: BTreeMap::new(),
        }
    }

    /// Replace the severity of one code, keeping the rest of the policy.
    pub fn with_override(mut self, code: IssueCode, severity: Severity) -> Self {
        self.overrides.insert(code, severity);
        self
    }

    pub fn severity_of(&self, code: IssueCode) -> Severity {
        self.overrides
            .get(&code)
            .copied()
            .unwrap_or_else(|| self.policy.severity_of(code))
    }
}

/// Thresholds and severities used by the validation rules.
///
/// No cross-field validation happens: `min_images > max_images` is accepted
/// and simply makes at least one of the two image-count findings fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleOptions {
    /// Fewer images than this reports `ImagesTooFew`.
    ///
    /// Default: `2`
    pub min_images: usize,

    /// More images than this reports `ImagesTooMany`.
    ///
    /// Default: `10`
    pub max_images: usize,

    /// Fewer product links than this reports `ProductLinksTooFew`.
    ///
    /// Default: `1`
    pub min_product_links: usize,

    /// More product links than this reports `ProductLinksTooMany`.
    ///
    /// Default: `10`
    pub max_product_links: usize,

    /// Fewer `<h2>` headings than this reports `MissingH2Headings`.
    ///
    /// Default: `2`
    pub min_h2_headings: usize,

    /// Bold share above this percentage reports `ExcessiveBoldText`.
    ///
    /// Default: `20.0`
    pub max_bold_percentage: f64,

    /// Severity assigned to each finding.
    ///
    /// Default: [`SeverityPolicy::Advisory`] with no overrides
    pub severities: SeverityTable,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            min_images: 2,
            max_images: 10,
            min_product_links: 1,
            max_product_links: 10,
            min_h2_headings: 2,
            max_bold_percentage: 20.0,
            severities: SeverityTable::default(),
        }
    }
}

impl RuleOptions {
    /// Creates a new builder for RuleOptions
    pub fn builder() -> RuleOptionsBuilder {
        RuleOptionsBuilder::default()
    }

    /// Parse options from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON options file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| PublishGuardError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn severity_of(&self, code: IssueCode) -> Severity {
        self.severities.severity_of(code)
    }
}

/// Builder for [`RuleOptions`].
#[derive(Default)]
pub struct RuleOptionsBuilder {
    min_images: Option<usize>,
    max_images: Option<usize>,
    min_product_links: Option<usize>,
    max_product_links: Option<usize>,
    min_h2_headings: Option<usize>,
    max_bold_percentage: Option<f64>,
    severity_policy: Option<SeverityPolicy>,
    severity_overrides: Vec<(IssueCode, Severity)>,
}

impl RuleOptionsBuilder {
    pub fn min_images(mut self, min: usize) -> Self {
        self.min_images = Some(min);
        self
    }

    pub fn max_images(mut self, max: usize) -> Self {
        self.max_images = Some(max);
        self
    }

    pub fn min_product_links(mut self, min: usize) -> Self {
        self.min_product_links = Some(min);
        self
    }

    pub fn max_product_links(mut self, max: usize) -> Self {
        self.max_product_links = Some(max);
        self
    }

    pub fn min_h2_headings(mut self, min: usize) -> Self {
        self.min_h2_headings = Some(min);
        self
    }

    pub fn max_bold_percentage(mut self, max: f64) -> Self {
        self.max_bold_percentage = Some(max);
        self
    }

    /// Select the base severity policy
    pub fn severity_policy(mut self, policy: SeverityPolicy) -> Self {
        self.severity_policy = Some(policy);
        self
    }

    /// Override the severity of a single code on top of the policy
    pub fn severity_override(mut self, code: IssueCode, severity: Severity) -> Self {
        self.severity_overrides.push((code, severity));
        self
    }

    /// Build the RuleOptions
    pub fn build(self) -> RuleOptions {
        let defaults = RuleOptions::default();
        let mut severities = SeverityTable::new(
            self.severity_policy
                .unwrap_or(defaults.severities.policy),
        );
        for (code, severity) in self.severity_overrides {
            severities = severities.with_override(code, severity);
        }

        RuleOptions {
            min_images: self.min_images.unwrap_or(defaults.min_images),
            max_images: self.max_images.unwrap_or(defaults.max_images),
            min_product_links: self
                .min_product_links
                .unwrap_or(defaults.min_product_links),
            max_product_links: self
                .max_product_links
                .unwrap_or(defaults.max_product_links),
            min_h2_headings: self.min_h2_headings.unwrap_or(defaults.min_h2_headings),
            max_bold_percentage: self
                .max_bold_percentage
                .unwrap_or(defaults.max_bold_percentage),
            severities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = RuleOptions::default();
        assert_eq!(options.min_images, 2);
        assert_eq!(options.max_images, 10);
        assert_eq!(options.min_product_links, 1);
        assert_eq!(options.max_product_links, 10);
        assert_eq!(options.min_h2_headings, 2);
        assert_eq!(options.max_bold_percentage, 20.0);
        assert_eq!(options.severities.policy, SeverityPolicy::Advisory);
    }

    #[test]
    fn builder_overrides_only_given_fields() {
        let options = RuleOptions::builder().max_images(4).min_h2_headings(1).build();
        assert_eq!(options.max_images, 4);
        assert_eq!(options.min_h2_headings, 1);
        assert_eq!(options.min_images, 2);
        assert_eq!(
            options,
            RuleOptions {
                max_images: 4,
                min_h2_headings: 1,
                ..RuleOptions::default()
            }
        );
    }

    #[test]
    fn advisory_policy_is_all_warnings() {
        for code in IssueCode::ALL {
            assert_eq!(SeverityPolicy::Advisory.severity_of(code), Severity::Warning);
        }
    }

    #[test]
    fn strict_policy_table() {
        let strict = SeverityPolicy::Strict;
        assert_eq!(strict.severity_of(IssueCode::ImagesTooFew), Severity::Error);
        assert_eq!(strict.severity_of(IssueCode::ImageNotOnGoogleDrive), Severity::Error);
        assert_eq!(strict.severity_of(IssueCode::ProductLinksTooFew), Severity::Error);
        assert_eq!(strict.severity_of(IssueCode::ExcessiveBoldText), Severity::Info);
        assert_eq!(strict.severity_of(IssueCode::ImagesTooMany), Severity::Warning);
        assert_eq!(strict.severity_of(IssueCode::MissingAltText), Severity::Warning);
    }

    #[test]
    fn overrides_take_precedence() {
        let table = SeverityTable::new(SeverityPolicy::Strict)
            .with_override(IssueCode::ImagesTooFew, Severity::Info);
        assert_eq!(table.severity_of(IssueCode::ImagesTooFew), Severity::Info);
        assert_eq!(table.severity_of(IssueCode::ProductLinksTooFew), Severity::Error);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let options = RuleOptions::from_json(r#"{"maxBoldPercentage": 12.5}"#).unwrap();
        assert_eq!(options.max_bold_percentage, 12.5);
        assert_eq!(options.min_images, 2);
        assert_eq!(options.severities, SeverityTable::default());
    }

    #[test]
    fn json_selects_policy_and_overrides() {
        let options = RuleOptions::from_json(
            r#"{"severities": {"policy": "strict", "overrides": {"MissingH2Headings": "Error"}}}"#,
        )
        .unwrap();
        assert_eq!(options.severity_of(IssueCode::ImagesTooFew), Severity::Error);
        assert_eq!(options.severity_of(IssueCode::MissingH2Headings), Severity::Error);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let err = RuleOptions::from_json(r#"{"minImages": "two"}"#).unwrap_err();
        assert!(matches!(err, PublishGuardError::Config(_)));

        let err = RuleOptions::from_json(r#"{"severities": {"policy": "lenient"}}"#).unwrap_err();
        assert!(matches!(err, PublishGuardError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = RuleOptions::from_file("/nonexistent/publishguard.json").unwrap_err();
        match err {
            PublishGuardError::Config(message) => {
                assert!(message.starts_with("/nonexistent/publishguard.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = RuleOptions::builder()
            .severity_policy(SeverityPolicy::Strict)
            .severity_override(IssueCode::ImageNotPublic, Severity::Error)
            .build();
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"policy\":\"strict\""));
        assert_eq!(RuleOptions::from_json(&json).unwrap(), options);
    }
}
