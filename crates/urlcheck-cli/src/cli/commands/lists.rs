//! `urlcheck lists` – show the active reference lists.

use urlcheck_core::ReferenceLists;

pub fn run_lists(lists: &ReferenceLists) {
    println!("Phishing blacklist ({}):", lists.phishing_domains.len());
    for domain in &lists.phishing_domains {
        println!("  {domain}");
    }

    println!("Legitimate domains ({}):", lists.legitimate_domains.len());
    for domain in &lists.legitimate_domains {
        println!("  {domain}");
    }

    println!("Suspicious keywords ({}):", lists.suspicious_keywords.len());
    for keyword in &lists.suspicious_keywords {
        println!("  {keyword}");
    }

    println!("Typo substitutions ({}):", lists.typo_substitutions.len());
    for (canonical, confusables) in &lists.typo_substitutions {
        println!("  {canonical} -> {}", confusables.join(", "));
    }
}
