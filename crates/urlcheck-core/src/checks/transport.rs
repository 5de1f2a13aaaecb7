//! Scheme inspection on the raw URL string.

/// Returns true only for a literal `https://` prefix.
///
/// Case-sensitive, no scheme normalization: `HTTPS://` and scheme-relative
/// URLs do not count.
pub fn uses_https(raw_url: &str) -> bool {
    raw_url.starts_with("https://")
}
