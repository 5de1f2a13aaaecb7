//! Aggregation of the individual checks into a single verdict.

use crate::checks;
use crate::hostname;
use crate::lists::ReferenceLists;
use crate::verdict::{Category, Verdict};

const MSG_EMPTY: &str = "Please enter a URL.";
const MSG_INVALID: &str = "Invalid URL format.";

const WARN_BLACKLIST: &str = "Domain is on a known (demo) phishing blacklist.";
const WARN_TYPOSQUAT: &str =
    "Domain appears to be a typosquatting attempt of a legitimate site.";
const WARN_NO_HTTPS: &str =
    "URL does NOT use HTTPS. This is highly suspicious for sensitive sites.";
const WARN_KEYWORDS: &str =
    "URL path/query contains suspicious keywords (e.g., \"login\", \"verify\").";

const NOTE_HTTPS: &str = "Uses HTTPS (good, but not a guarantee of safety).";

const TITLE_WARNING: &str = "Potential Phishing Detected!";
const TITLE_SAFE: &str = "Looks Potentially Safe (Basic Check)";
const TITLE_NO_INDICATORS: &str = "No Obvious Phishing Indicators (Basic Check)";

/// Runs the four heuristics over a URL string and merges their outcomes.
///
/// Holds the reference lists for its lifetime; evaluation itself is pure
/// and stateless, so one evaluator can serve any number of calls (or
/// threads) without coordination.
pub struct Evaluator {
    lists: ReferenceLists,
}

impl Evaluator {
    pub fn new(lists: ReferenceLists) -> Self {
        Self { lists }
    }

    /// Evaluator over the built-in demo lists.
    pub fn with_default_lists() -> Self {
        Self::new(ReferenceLists::default())
    }

    pub fn lists(&self) -> &ReferenceLists {
        &self.lists
    }

    /// Evaluates one URL string. Never fails: empty and malformed input
    /// come back as Neutral verdicts, not errors.
    pub fn evaluate(&self, input: &str) -> Verdict {
        let input = input.trim();
        if input.is_empty() {
            return Verdict::neutral(MSG_EMPTY);
        }

        let hostname = match hostname::hostname_of(input) {
            Ok(h) => h,
            Err(_) => return Verdict::neutral(MSG_INVALID),
        };

        let mut warnings = Vec::new();
        let mut indicators = Vec::new();

        // All four checks run unconditionally; none short-circuits another.
        if checks::is_blacklisted(&hostname, &self.lists) {
            warnings.push(WARN_BLACKLIST.to_string());
        }
        if checks::looks_like_typosquat(&hostname, &self.lists) {
            warnings.push(WARN_TYPOSQUAT.to_string());
        }
        if checks::uses_https(input) {
            indicators.push(NOTE_HTTPS.to_string());
        } else {
            warnings.push(WARN_NO_HTTPS.to_string());
        }
        if checks::has_suspicious_keywords(input, &self.lists) {
            warnings.push(WARN_KEYWORDS.to_string());
        }

        tracing::debug!(
            "evaluated host={} warnings={} indicators={}",
            hostname,
            warnings.len(),
            indicators.len()
        );

        let (title, category) = if !warnings.is_empty() {
            (TITLE_WARNING, Category::Warning)
        } else if !indicators.is_empty() {
            (TITLE_SAFE, Category::Safe)
        } else {
            (TITLE_NO_INDICATORS, Category::Safe)
        };

        Verdict {
            title: title.to_string(),
            category,
            warnings,
            indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_neutral() {
        let e = Evaluator::with_default_lists();
        let v = e.evaluate("");
        assert_eq!(v.category, Category::Neutral);
        assert_eq!(v.title, "Please enter a URL.");
        assert!(v.warnings.is_empty());
        assert!(v.indicators.is_empty());
    }

    #[test]
    fn whitespace_input_is_neutral() {
        let e = Evaluator::with_default_lists();
        let v = e.evaluate("   \t ");
        assert_eq!(v.category, Category::Neutral);
        assert_eq!(v.title, "Please enter a URL.");
    }

    #[test]
    fn unparseable_input_is_neutral() {
        let e = Evaluator::with_default_lists();
        let v = e.evaluate("not a url");
        assert_eq!(v.category, Category::Neutral);
        assert_eq!(v.title, "Invalid URL format.");
    }

    #[test]
    fn input_is_trimmed_before_evaluation() {
        let e = Evaluator::with_default_lists();
        let v = e.evaluate("  https://paypal.com/  ");
        assert_eq!(v.category, Category::Safe);
    }

    #[test]
    fn clean_https_url_is_safe_with_indicator() {
        let e = Evaluator::with_default_lists();
        let v = e.evaluate("https://example.com/home");
        assert_eq!(v.category, Category::Safe);
        assert_eq!(v.title, "Looks Potentially Safe (Basic Check)");
        assert!(v.warnings.is_empty());
        assert_eq!(v.indicators.len(), 1);
        assert!(v.indicators[0].contains("Uses HTTPS"));
    }

    #[test]
    fn warnings_outrank_indicators() {
        let e = Evaluator::with_default_lists();
        // Blacklisted but served over HTTPS: still a warning verdict, and
        // the HTTPS indicator is kept alongside it.
        let v = e.evaluate("https://paypal-verify.com/");
        assert_eq!(v.category, Category::Warning);
        assert_eq!(v.title, "Potential Phishing Detected!");
        assert_eq!(v.warnings.len(), 1);
        assert_eq!(v.indicators.len(), 1);
    }

    #[test]
    fn warning_order_is_fixed() {
        let e = Evaluator::with_default_lists();
        let v = e.evaluate("http://paypal-verify.com/login");
        assert_eq!(v.warnings.len(), 3);
        assert!(v.warnings[0].contains("blacklist"));
        assert!(v.warnings[1].contains("HTTPS"));
        assert!(v.warnings[2].contains("keywords"));
    }

    #[test]
    fn uppercase_scheme_counts_as_not_https() {
        let e = Evaluator::with_default_lists();
        // The transport check is a literal prefix test on the raw string.
        let v = e.evaluate("HTTPS://example.com/");
        assert_eq!(v.category, Category::Warning);
        assert!(v.warnings.iter().any(|w| w.contains("does NOT use HTTPS")));
        assert!(v.indicators.is_empty());
    }
}
