//! `urlcheck check <url>` – evaluate a URL and print the verdict.

use anyhow::Result;
use urlcheck_core::{Evaluator, ReferenceLists};

use crate::cli::render::render_verdict;

/// Evaluation outcomes are output, not errors: a Warning (or Neutral)
/// verdict still exits 0.
pub fn run_check(lists: ReferenceLists, url: &str, json: bool) -> Result<()> {
    let evaluator = Evaluator::new(lists);
    let verdict = evaluator.evaluate(url);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render_verdict(&verdict));
    }

    Ok(())
}
