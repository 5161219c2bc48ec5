//! Letter multisets and the anagram-subset check
//!
//! A word can be spelled from a root word when, for every letter, it uses
//! that letter no more times than the root contains it.

use rustc_hash::FxHashMap;

/// Count of each character in a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the characters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("letter");
    /// assert_eq!(counts.count('t'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// How many times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Check whether every letter of `self` is available in `pool`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::of("listen");
    /// assert!(LetterCounts::of("line").is_subset_of(&root));
    /// assert!(!LetterCounts::of("lisp").is_subset_of(&root));
    /// assert!(!LetterCounts::of("ll").is_subset_of(&root));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, pool: &Self) -> bool {
        self.total <= pool.total
            && self
                .counts
                .iter()
                .all(|(&letter, &needed)| pool.count(letter) >= needed)
    }
}
