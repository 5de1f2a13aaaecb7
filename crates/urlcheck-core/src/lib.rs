//! Core evaluation engine for urlcheck, an offline heuristic phishing URL
//! checker.

pub mod checks;
pub mod config;
pub mod evaluator;
pub mod hostname;
pub mod lists;
pub mod logging;
pub mod verdict;

pub use evaluator::Evaluator;
pub use hostname::EvaluateError;
pub use lists::ReferenceLists;
pub use verdict::{Category, Verdict};
