//! Hand-off of finished articles to a publishing integration.
//!
//! Publishing failures are reported in [`UploadResult`], not as errors.

use crate::{article::Article, payload::PublishPayload};
use serde::{Deserialize, Serialize};

/// Outcome of a publish attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub success: bool,
    pub message: String,
}

impl UploadResult {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Accepts a finished article and reports whether it was published.
pub trait Publisher {
    fn publish(&self, article: &Article, payload: &PublishPayload) -> UploadResult;
}

impl<P: Publisher + ?Sized> Publisher for &P {
    fn publish(&self, article: &Article, payload: &PublishPayload) -> UploadResult {
        (**self).publish(article, payload)
    }
}

/// Publisher that accepts everything without contacting any CMS.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPublisher;

impl Publisher for PlaceholderPublisher {
    fn publish(&self, _article: &Article, payload: &PublishPayload) -> UploadResult {
        UploadResult::succeeded(format!(
            "Placeholder upload succeeded for '{}'.",
            payload.title
        ))
    }
}
