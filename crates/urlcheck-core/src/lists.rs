//! Reference lists driving the URL heuristics.
//!
//! Demo-scale data, injectable rather than compiled-in: the evaluator takes
//! a `ReferenceLists` value, and the config layer can override any list from
//! `config.toml`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The four reference lists consulted by the checks.
///
/// Each field falls back to the built-in demo data when missing from a
/// config file, so a user can override a single list without restating the
/// others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceLists {
    /// Fully-qualified domains treated as known phishing hosts.
    #[serde(default = "default_phishing_domains")]
    pub phishing_domains: BTreeSet<String>,

    /// Well-known legitimate domains, in scan order. The typosquatting
    /// check uses only the first label of each entry.
    #[serde(default = "default_legitimate_domains")]
    pub legitimate_domains: Vec<String>,

    /// Lowercase substrings associated with phishing lures, matched against
    /// the URL path and query.
    #[serde(default = "default_suspicious_keywords")]
    pub suspicious_keywords: Vec<String>,

    /// Canonical character or bigram -> replacements an attacker might use
    /// in its place. Not symmetric: the key is the legitimate character,
    /// the values are the confusables. Kept last so the serialized TOML
    /// table follows the plain arrays.
    #[serde(default = "default_typo_substitutions")]
    pub typo_substitutions: BTreeMap<String, Vec<String>>,
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            phishing_domains: default_phishing_domains(),
            legitimate_domains: default_legitimate_domains(),
            suspicious_keywords: default_suspicious_keywords(),
            typo_substitutions: default_typo_substitutions(),
        }
    }
}

fn default_phishing_domains() -> BTreeSet<String> {
    [
        "paypal-verify.com",
        "login-apple.net",
        "microsoft-support.co",
        "amazon-secure-login.info",
        "bankofamerica-update.xyz",
        "wellsfargo-security.biz",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_legitimate_domains() -> Vec<String> {
    [
        "google.com",
        "microsoft.com",
        "apple.com",
        "amazon.com",
        "paypal.com",
        "facebook.com",
        "twitter.com",
        "linkedin.com",
        "ebay.com",
        "netflix.com",
        "bankofamerica.com",
        "wellsfargo.com",
        "chase.com",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_typo_substitutions() -> BTreeMap<String, Vec<String>> {
    // Bigram entries ("rn", "vv", "cl" and the value "rn") are carried for
    // completeness of the data set; the equal-length comparison in the
    // typosquatting check cannot apply them (see checks::typosquat).
    let entries: [(&str, &[&str]); 11] = [
        ("o", &["0"]),
        ("l", &["1", "i"]),
        ("e", &["3"]),
        ("a", &["@"]),
        ("s", &["5", "$"]),
        ("g", &["9"]),
        ("m", &["rn"]),
        ("rn", &["m"]),
        ("vv", &["w"]),
        ("w", &["vv"]),
        ("cl", &["d"]),
    ];
    entries
        .into_iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

fn default_suspicious_keywords() -> Vec<String> {
    [
        "verify", "login", "security", "update", "account", "invoice", "payment", "alert",
        "urgent", "confirm",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
