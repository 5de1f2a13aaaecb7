//! Substring search for lure keywords in the URL path and query.

use crate::lists::ReferenceLists;

/// Returns true when any suspicious keyword occurs in the URL's path or
/// query, compared lowercase.
///
/// Fails open: an unparseable URL reports no keywords. The aggregator only
/// calls this after hostname extraction succeeded, but the function parses
/// its own input so it stays independently callable.
pub fn has_suspicious_keywords(raw_url: &str, lists: &ReferenceLists) -> bool {
    let parsed = match url::Url::parse(raw_url) {
        Ok(p) => p,
        Err(_) => return false,
    };

    let mut haystack = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        haystack.push('?');
        haystack.push_str(query);
    }
    let haystack = haystack.to_lowercase();

    lists
        .suspicious_keywords
        .iter()
        .any(|kw| haystack.contains(kw.as_str()))
}
