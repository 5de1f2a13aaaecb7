//! Exact-match lookup against the known phishing domain list.

use crate::lists::ReferenceLists;

/// Returns true when the hostname is on the phishing blacklist.
///
/// A literal leading `www.` is stripped (once) before the lookup. Matching
/// is exact beyond that: `paypal-verify.com.evil.org` does not hit the
/// `paypal-verify.com` entry. The hostname is expected to be lowercase
/// already.
pub fn is_blacklisted(hostname: &str, lists: &ReferenceLists) -> bool {
    let cleaned = hostname.strip_prefix("www.").unwrap_or(hostname);
    lists.phishing_domains.contains(cleaned)
}
