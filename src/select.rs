//! Selection policy
//!
//! Computes which subset of the candidate URLs a run processes, given the
//! submission history. Candidates pass through in order, duplicates and
//! all; an empty result is a valid terminal outcome, not an error.

use crate::types::SelectionMode;
use std::collections::HashSet;

/// Select the URLs to process for a run
pub fn select_urls(
    candidates: &[String],
    history: &HashSet<String>,
    mode: SelectionMode,
) -> Vec<String> {
    match mode {
        SelectionMode::All => candidates.to_vec(),
        SelectionMode::NewOnly => candidates
            .iter()
            .filter(|url| !history.contains(*url))
            .cloned()
            .collect(),
        SelectionMode::PreviouslySubmitted => candidates
            .iter()
            .filter(|url| history.contains(*url))
            .cloned()
            .collect(),
    }
}
