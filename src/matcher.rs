use alloc::vec::Vec;

/// A successful match of a query against a candidate string.
///
/// A `MatchResult` only exists for candidates that actually contain the query
/// as a subsequence. A candidate that does not match is represented by the
/// absence of a result, never by a zero score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The candidate string that matched.
    pub candidate: &'a str,
    /// Relevance score, higher for a more confident match. Scores are not
    /// normalized by length, so longer queries produce larger scores.
    pub score: usize,
    /// Character positions in `candidate` that matched the query, in strictly
    /// increasing order. Contains exactly one entry per query character.
    pub matched_indices: Vec<usize>,
}

/// Fuzzy matcher instance. Holds memory for the state of the fuzzy matcher so
/// that large batches of queries can be processed with minimal allocations.
/// When matching one query against many candidates, use a common instance of
/// this struct to improve performance by avoiding extra allocations.
pub struct FuzzyMatcher {
    query_chars: Vec<char>,
    candidate_chars: Vec<char>,
}

impl FuzzyMatcher {
    /// Creates a new instance of a fuzzy matcher.
    pub fn new() -> Self {
        FuzzyMatcher {
            query_chars: Vec::new(),
            candidate_chars: Vec::new(),
        }
    }

    /// Matches a query string against a candidate string. Returns the score
    /// and the matched character positions, or `None` if the query is not a
    /// subsequence of the candidate.
    ///
    /// Matching is case-insensitive and takes the leftmost occurrence of each
    /// query character. The returned indices are character positions into the
    /// original candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut matcher = path_fuzzy_match::FuzzyMatcher::new();
    /// let result = matcher.fuzzy_match("docs", "work/project-docs");
    /// assert!(result.is_some());
    /// let no_match = matcher.fuzzy_match("xyz", "work/project-docs");
    /// assert!(no_match.is_none());
    /// ```
    pub fn fuzzy_match<'a>(&mut self, query: &str, candidate: &'a str) -> Option<MatchResult<'a>> {
        // Break both strings into vectors of characters so that matched
        // positions index a well-defined sequence shared with the segmenter.
        self.query_chars.clear();
        self.query_chars.extend(query.chars());
        self.candidate_chars.clear();
        self.candidate_chars.extend(candidate.chars());

        // Leftmost-greedy scan: take the earliest possible occurrence of each
        // query character. This is deterministic but not necessarily the
        // alignment that maximizes the score.
        let mut matched_indices = Vec::with_capacity(self.query_chars.len());
        let mut cursor = 0;
        for (i, &candidate_char) in self.candidate_chars.iter().enumerate() {
            if cursor >= self.query_chars.len() {
                break;
            }
            if chars_match(candidate_char, self.query_chars[cursor]) {
                matched_indices.push(i);
                cursor += 1;
            }
        }

        // Query characters left over means no subsequence exists. An empty
        // query falls through with an empty index set and a score of zero.
        if cursor < self.query_chars.len() {
            return None;
        }

        let last_separator = self.candidate_chars.iter().rposition(|&c| c == '/');

        let mut score = 0;
        let mut prev_index = None;
        for &index in &matched_indices {
            // Matches in the final path component are worth more than matches
            // in parent components.
            let in_basename = match last_separator {
                Some(separator) => index > separator,
                None => true,
            };
            score += if in_basename { 2 } else { 1 };

            if let Some(prev_index) = prev_index {
                if index == prev_index + 1 {
                    // Contiguous run bonus
                    score += 3;
                }
            }
            prev_index = Some(index);
        }

        Some(MatchResult {
            candidate,
            score,
            matched_indices,
        })
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive character comparison. The `eq_ignore_ascii_case` function
/// is *much* faster than a full Unicode case-insensitive comparison, so if
/// both characters are ASCII, optimize for performance.
fn chars_match(candidate_char: char, query_char: char) -> bool {
    if candidate_char.is_ascii() && query_char.is_ascii() {
        candidate_char.eq_ignore_ascii_case(&query_char)
    } else {
        candidate_char
            .to_lowercase()
            .zip(query_char.to_lowercase())
            .all(|(a, b)| a == b)
    }
}

/// Matches a query string against a candidate string. Returns the score and
/// the matched character positions, or `None` if the query is not a
/// subsequence of the candidate.
///
/// When performing a large batch of matches, use [`FuzzyMatcher`] instead.
///
/// # Examples
///
/// ```
/// let result = path_fuzzy_match::fuzzy_match("cfg", "repos/config").unwrap();
/// assert_eq!(result.matched_indices, vec![6, 9, 11]);
/// ```
pub fn fuzzy_match<'a>(query: &str, candidate: &'a str) -> Option<MatchResult<'a>> {
    let mut matcher = FuzzyMatcher::new();
    matcher.fuzzy_match(query, candidate)
}
