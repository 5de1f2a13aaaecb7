//! Independent URL heuristics feeding the verdict aggregator.
//!
//! Each check is a pure function of its input and the reference lists; the
//! aggregator runs all of them unconditionally.

mod blacklist;
mod keywords;
mod transport;
mod typosquat;

pub use blacklist::is_blacklisted;
pub use keywords::has_suspicious_keywords;
pub use transport::uses_https;
pub use typosquat::looks_like_typosquat;
