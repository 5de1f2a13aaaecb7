//! Verdict value handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Overall classification of one evaluation.
///
/// `Neutral` covers the two cases where no evaluation happened: empty input
/// and unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Safe,
    Warning,
    Neutral,
}

/// Aggregate result of one evaluation: a headline, the triggered warnings,
/// and any positive indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub title: String,
    pub category: Category,
    pub warnings: Vec<String>,
    pub indicators: Vec<String>,
}

impl Verdict {
    /// Neutral verdict for input that could not be evaluated.
    pub(crate) fn neutral(title: &str) -> Self {
        Self {
            title: title.to_string(),
            category: Category::Neutral,
            warnings: Vec::new(),
            indicators: Vec::new(),
        }
    }
}
