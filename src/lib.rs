//! Fuzzy subsequence matching with match highlighting, built for interactive
//! pickers over directory paths and SSH host names.
//!
//! A query matches a candidate when every character of the query appears in
//! the candidate in the same order, not necessarily contiguously, compared
//! case-insensitively. The matcher scans left to right and takes the earliest
//! possible occurrence of each query character, so results are deterministic.
//! Scoring favors matches after the last path separator (the basename) and
//! unbroken runs of adjacent matches; no optimal-alignment search is
//! performed.
//!
//! Alongside the score, each match carries the exact character positions that
//! matched. [`segments`] turns those positions back into contiguous
//! highlighted and plain runs that concatenate to the original string, ready
//! for rendering.
//!
//! This crate provides a [`FuzzyMatcher`] struct for batch processing in
//! addition to a [`fuzzy_match`] function for matching a single item, and a
//! [`rank`] helper that filters and sorts a whole candidate collection.
//!
//! # Example usage
//!
//! ```
//! let mut matcher = path_fuzzy_match::FuzzyMatcher::new();
//! let result = matcher.fuzzy_match("cfg", "repos/config").unwrap();
//! assert_eq!(result.matched_indices, vec![6, 9, 11]);
//!
//! let spans = path_fuzzy_match::segments(result.candidate, &result.matched_indices);
//! let rendered: String = spans.iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(rendered, "repos/config");
//! ```

#![no_std]

extern crate alloc;
use alloc::vec::Vec;

mod highlight;
mod matcher;

pub use highlight::{segments, Segment};
pub use matcher::{fuzzy_match, FuzzyMatcher, MatchResult};

/// Matches a query against every candidate in a collection, discards the
/// candidates that do not match, and sorts the survivors by descending score.
/// Candidates with equal scores keep their input order.
///
/// # Examples
///
/// ```
/// let results = path_fuzzy_match::rank("doc", ["notes.txt", "docker/config", "work/docs"]);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].candidate, "work/docs");
/// assert_eq!(results[1].candidate, "docker/config");
/// ```
pub fn rank<'a, I>(query: &str, candidates: I) -> Vec<MatchResult<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut matcher = FuzzyMatcher::new();
    let mut results: Vec<_> = candidates
        .into_iter()
        .filter_map(|candidate| matcher.fuzzy_match(query, candidate))
        .collect();
    // Stable sort so that equal scores preserve candidate order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
