//! Plain-text rendering of a verdict.

use urlcheck_core::{Category, Verdict};

/// Formats a verdict for the terminal: title line, then warnings (`!`) and
/// indicators (`+`). A non-Neutral verdict with nothing to list gets an
/// explicit filler line so the output never ends at a bare title.
pub fn render_verdict(verdict: &Verdict) -> String {
    let mut out = String::new();
    out.push_str(&verdict.title);
    out.push('\n');

    for warning in &verdict.warnings {
        out.push_str(&format!("  ! {warning}\n"));
    }
    for indicator in &verdict.indicators {
        out.push_str(&format!("  + {indicator}\n"));
    }

    if verdict.warnings.is_empty()
        && verdict.indicators.is_empty()
        && verdict.category != Category::Neutral
    {
        out.push_str("  No specific indicators detected by this basic tool.\n");
    }

    out
}
