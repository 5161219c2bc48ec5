//! Points for an accepted word

/// Score for an accepted candidate: `root_len - candidate_len + 1`
///
/// Shorter words are worth more. The engine only accepts candidates whose
/// letters come from the root, so `candidate_len <= root_len` and the result
/// is at least 1; the formula itself is not clamped.
///
/// # Examples
/// ```
/// use word_scramble::game::score_delta;
///
/// assert_eq!(score_delta(8, 4), 5);
/// assert_eq!(score_delta(8, 8), 1);
/// ```
#[inline]
#[must_use]
pub const fn score_delta(root_len: usize, candidate_len: usize) -> i64 {
    root_len as i64 - candidate_len as i64 + 1
}
