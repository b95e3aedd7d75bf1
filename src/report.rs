//! Terminal rendering of a run. Results print as soon as the search returns,
//! the recommendation once the summary call finishes.

use crate::consts::{SUMMARY_PREVIEW_CHARS, preview};
use crate::engine::retrieval::SearchResult;

/// Search results listing with a short preview of each summary.
pub fn render_results(results: &[SearchResult]) -> String {
    let mut out = String::from("\n=== Search Results ===\n");
    for result in results {
        out.push_str(&format!(
            "\n- {}\n  Summary: {}...\n",
            result.title,
            preview(&result.summary, SUMMARY_PREVIEW_CHARS)
        ));
    }
    out
}

pub fn render_recommendation(recommendation: &str) -> String {
    format!("=== Final Recommendations ===\n{recommendation}")
}
