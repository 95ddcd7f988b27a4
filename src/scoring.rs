//! Severity-weighted readiness scoring.
//!
//! The score starts at 100 and loses 25 points per error, 10 per warning and
//! 5 per informational finding. The total is clamped to `0..=100` once, after
//! all deductions, and bucketed into a [`ReadinessStatus`].
//!
//! ```rust
//! use publishguard::{score, Issue, IssueCode, ReadinessStatus, Severity};
//!
//! assert_eq!(score(&[]).value, 100);
//!
//! let issues = vec![
//!     Issue::new(IssueCode::ImagesTooFew, Severity::Warning, "Warn"),
//!     Issue::new(IssueCode::ProductLinksTooFew, Severity::Warning, "Warn"),
//!     Issue::new(IssueCode::MissingH2Headings, Severity::Warning, "Warn"),
//! ];
//! let result = score(&issues);
//! assert_eq!(result.value, 70);
//! assert_eq!(result.status, ReadinessStatus::NeedsReview);
//! ```

use crate::issue::Issue;
use serde::{Deserialize, Serialize};

const MAX_SCORE: i32 = 100;
const READY_THRESHOLD: u8 = 80;
const REVIEW_THRESHOLD: u8 = 60;

/// Tri-state publish readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadinessStatus {
    Ready,
    NeedsReview,
    Blocked,
}

impl ReadinessStatus {
    /// `>= 80` is ready, `>= 60` needs review, anything lower is blocked.
    pub fn from_score(value: u8) -> Self {
        if value >= READY_THRESHOLD {
            ReadinessStatus::Ready
        } else if value >= REVIEW_THRESHOLD {
            ReadinessStatus::NeedsReview
        } else {
            ReadinessStatus::Blocked
        }
    }
}

/// Readiness score in `0..=100` and the status derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "score")]
    pub value: u8,
    pub status: ReadinessStatus,
}

impl Score {
    pub fn new(value: u8) -> Self {
        let value = value.min(MAX_SCORE as u8);
        Self {
            value,
            status: ReadinessStatus::from_score(value),
        }
    }
}

/// Reduce findings to a score. Order of `issues` does not matter.
pub fn score(issues: &[Issue]) -> Score {
    let deducted: i32 = issues.iter().map(|issue| issue.severity.penalty()).sum();
    let value = (MAX_SCORE - deducted).clamp(0, MAX_SCORE);
    Score::new(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueCode, Severity};
    use proptest::prelude::*;

    fn issue(severity: Severity) -> Issue {
        Issue::new(IssueCode::ImagesTooFew, severity, "test")
    }

    #[test]
    fn no_issues_is_ready() {
        let result = score(&[]);
        assert_eq!(result.value, 100);
        assert_eq!(result.status, ReadinessStatus::Ready);
    }

    #[test]
    fn three_warnings_need_review() {
        let result = score(&vec![issue(Severity::Warning); 3]);
        assert_eq!(result.value, 70);
        assert_eq!(result.status, ReadinessStatus::NeedsReview);
    }

    #[test]
    fn three_errors_are_blocked() {
        let result = score(&vec![issue(Severity::Error); 3]);
        assert_eq!(result.value, 25);
        assert_eq!(result.status, ReadinessStatus::Blocked);
    }

    #[test]
    fn mixed_severities() {
        let result = score(&[
            issue(Severity::Error),
            issue(Severity::Warning),
            issue(Severity::Info),
        ]);
        assert_eq!(result.value, 60);
        assert_eq!(result.status, ReadinessStatus::NeedsReview);
    }

    #[test]
    fn clamps_at_zero() {
        let result = score(&vec![issue(Severity::Error); 10]);
        assert_eq!(result.value, 0);
        assert_eq!(result.status, ReadinessStatus::Blocked);
    }

    #[test]
    fn status_boundaries() {
        assert_eq!(ReadinessStatus::from_score(80), ReadinessStatus::Ready);
        assert_eq!(ReadinessStatus::from_score(79), ReadinessStatus::NeedsReview);
        assert_eq!(ReadinessStatus::from_score(60), ReadinessStatus::NeedsReview);
        assert_eq!(ReadinessStatus::from_score(59), ReadinessStatus::Blocked);
        assert_eq!(ReadinessStatus::from_score(0), ReadinessStatus::Blocked);
    }

    #[test]
    fn serializes_score_and_status_by_name() {
        let json = serde_json::to_value(score(&[issue(Severity::Warning)])).unwrap();
        assert_eq!(json, serde_json::json!({"score": 90, "status": "Ready"}));
    }

    fn severity() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Info),
            Just(Severity::Warning),
            Just(Severity::Error),
        ]
    }

    proptest! {
        #[test]
        fn score_stays_in_range(severities in prop::collection::vec(severity(), 0..40)) {
            let issues: Vec<Issue> = severities.into_iter().map(issue).collect();
            let result = score(&issues);
            prop_assert!(result.value <= 100);
            prop_assert_eq!(result.status, ReadinessStatus::from_score(result.value));
        }

        #[test]
        fn adding_errors_never_raises_score(
            severities in prop::collection::vec(severity(), 0..20),
            extra in 1usize..6,
        ) {
            let mut issues: Vec<Issue> = severities.into_iter().map(issue).collect();
            let before = score(&issues).value;
            issues.extend(std::iter::repeat(issue(Severity::Error)).take(extra));
            prop_assert!(score(&issues).value <= before);
        }

        #[test]
        fn order_does_not_matter(severities in prop::collection::vec(severity(), 0..20)) {
            let issues: Vec<Issue> = severities.into_iter().map(issue).collect();
            let mut reversed = issues.clone();
            reversed.reverse();
            prop_assert_eq!(score(&issues), score(&reversed));
        }
    }
}
