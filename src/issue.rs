//! Validation findings.
//!
//! Codes and severities serialize as their variant names (`"ImagesTooFew"`,
//! `"Warning"`), never as ordinals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of findings the rule set can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueCode {
    ImagesTooFew,
    ImagesTooMany,
    ImageNotOnGoogleDrive,
    ImageNotPublic,
    MissingAltText,
    ProductLinksTooFew,
    ProductLinksTooMany,
    MissingH2Headings,
    ExcessiveBoldText,
}

impl IssueCode {
    pub const ALL: [IssueCode; 9] = [
        IssueCode::ImagesTooFew,
        IssueCode::ImagesTooMany,
        IssueCode::ImageNotOnGoogleDrive,
        IssueCode::ImageNotPublic,
        IssueCode::MissingAltText,
        IssueCode::ProductLinksTooFew,
        IssueCode::ProductLinksTooMany,
        IssueCode::MissingH2Headings,
        IssueCode::ExcessiveBoldText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::ImagesTooFew => "ImagesTooFew",
            IssueCode::ImagesTooMany => "ImagesTooMany",
            IssueCode::ImageNotOnGoogleDrive => "ImageNotOnGoogleDrive",
            IssueCode::ImageNotPublic => "ImageNotPublic",
            IssueCode::MissingAltText => "MissingAltText",
            IssueCode::ProductLinksTooFew => "ProductLinksTooFew",
            IssueCode::ProductLinksTooMany => "ProductLinksTooMany",
            IssueCode::MissingH2Headings => "MissingH2Headings",
            IssueCode::ExcessiveBoldText => "ExcessiveBoldText",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a finding weighs against publish readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Points deducted from the readiness score per finding.
    pub fn penalty(self) -> i32 {
        match self {
            Severity::Error => 25,
            Severity::Warning => 10,
            Severity::Info => 5,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        f.write_str(name)
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}
