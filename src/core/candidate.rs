//! Normalized player input
//!
//! A `Candidate` is what every validation check sees: the raw input with
//! surrounding whitespace trimmed and all letters lowercased.

use super::LetterCounts;
use std::fmt;

/// A normalized, non-empty candidate word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Normalize raw input into a candidate
    ///
    /// Returns `None` when nothing is left after trimming; empty input is
    /// ignored rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::normalize("  Worm\n").unwrap();
    /// assert_eq!(candidate.text(), "worm");
    /// assert!(Candidate::normalize(" \t ").is_none());
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() { None } else { Some(Self(text)) }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(&self.0)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
