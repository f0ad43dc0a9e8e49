use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// A maximal run of characters sharing the same highlight state. Concatenating
/// the `text` of every segment returned for a string reproduces that string
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

/// Splits `text` into maximal runs of highlighted and non-highlighted
/// characters, where the characters at `matched_indices` are the highlighted
/// ones. Indices are character positions, matching the index space of
/// [`MatchResult::matched_indices`](crate::MatchResult::matched_indices).
///
/// Every index must lie within `text`; an out-of-range index is a bug in the
/// caller and panics in debug builds. In release builds such an index simply
/// never highlights anything.
///
/// # Examples
///
/// ```
/// use path_fuzzy_match::{segments, Segment};
///
/// let spans = segments("abc", &[1]);
/// assert_eq!(
///     spans,
///     vec![
///         Segment { text: "a".into(), highlighted: false },
///         Segment { text: "b".into(), highlighted: true },
///         Segment { text: "c".into(), highlighted: false },
///     ]
/// );
/// ```
pub fn segments(text: &str, matched_indices: &[usize]) -> Vec<Segment> {
    let char_count = text.chars().count();

    // Membership mask over character positions for O(1) lookups during the
    // walk below.
    let mut highlighted_at = vec![false; char_count];
    for &index in matched_indices {
        debug_assert!(
            index < char_count,
            "matched index {} out of range for text of {} chars",
            index,
            char_count
        );
        if let Some(slot) = highlighted_at.get_mut(index) {
            *slot = true;
        }
    }

    let mut result = Vec::new();
    let mut run = String::new();
    let mut run_highlighted = false;
    for (i, c) in text.chars().enumerate() {
        if i == 0 {
            run_highlighted = highlighted_at[0];
        } else if highlighted_at[i] != run_highlighted {
            result.push(Segment {
                text: core::mem::take(&mut run),
                highlighted: run_highlighted,
            });
            run_highlighted = highlighted_at[i];
        }
        run.push(c);
    }

    // Flush the final run. An empty input produces no runs at all.
    if !run.is_empty() {
        result.push(Segment {
            text: run,
            highlighted: run_highlighted,
        });
    }
    result
}
