//! Hostname extraction, the only failing step of an evaluation.

use thiserror::Error;

/// The input string could not be evaluated at all.
///
/// The aggregator recovers this into a Neutral verdict; it never escapes to
/// the caller as a failure.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// Not a syntactically valid URL, or a URL without a host part.
    #[error("invalid URL: {input}")]
    InvalidUrl { input: String },
}

/// Extracts the lowercase hostname from a URL string.
///
/// No normalization beyond what URL parsing itself performs; in particular
/// a leading `www.` is kept here (the blacklist check strips it, the
/// typosquatting check does not).
pub fn hostname_of(url: &str) -> Result<String, EvaluateError> {
    let parsed = url::Url::parse(url).map_err(|_| EvaluateError::InvalidUrl {
        input: url.to_string(),
    })?;
    let host = parsed.host_str().ok_or_else(|| EvaluateError::InvalidUrl {
        input: url.to_string(),
    })?;
    Ok(host.to_ascii_lowercase())
}
