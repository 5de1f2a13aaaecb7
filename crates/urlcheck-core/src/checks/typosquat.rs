//! Character-substitution similarity against known-good domain roots.

use crate::lists::ReferenceLists;

/// Returns true when the hostname's root label looks like a confusable
/// rewrite of a legitimate domain root.
///
/// The hostname arrives unstripped (no `www.` removal, unlike the blacklist
/// check): with two or more labels the second-to-last is the candidate root
/// anyway, so the difference is only observable for single-label hostnames.
///
/// Comparison is per-position over equal-length roots, so the bigram
/// entries of the substitution table (`rn`, `vv`, `cl`) can never apply:
/// they would change the string length. They stay in the table as data but
/// are inert here.
pub fn looks_like_typosquat(hostname: &str, lists: &ReferenceLists) -> bool {
    let labels: Vec<&str> = hostname.split('.').collect();
    let candidate = if labels.len() >= 2 {
        labels[labels.len() - 2]
    } else {
        hostname
    };
    let candidate: Vec<char> = candidate.chars().collect();

    for legit in &lists.legitimate_domains {
        let root: Vec<char> = match legit.split('.').next() {
            Some(r) => r.chars().collect(),
            None => continue,
        };

        // An exact root match is presumed legitimate (or already caught by
        // the blacklist); it ends the whole scan, not just this entry.
        if candidate == root {
            return false;
        }

        // Cheap pre-filter: more than two characters apart in length is a
        // different name, not a typo.
        if candidate.len().abs_diff(root.len()) > 2 {
            continue;
        }

        // Substitutions never change length, so only equal-length
        // candidates are compared. First match wins.
        if candidate.len() == root.len() && substitutes_for(&candidate, &root, lists) {
            return true;
        }
    }

    false
}

/// Per-position test: every differing position must carry an allowed
/// substitution of the legitimate character.
fn substitutes_for(candidate: &[char], root: &[char], lists: &ReferenceLists) -> bool {
    candidate.iter().zip(root.iter()).all(|(&got, &want)| {
        if got == want {
            return true;
        }
        match lists.typo_substitutions.get(want.to_string().as_str()) {
            Some(subs) => subs.contains(&got.to_string()),
            None => false,
        }
    })
}
