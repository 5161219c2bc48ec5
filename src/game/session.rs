//! State of a single round

use crate::core::LetterCounts;
use std::fmt;

/// Error raised when a round cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The root word source had nothing usable to offer
    NoRootWord,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRootWord => write!(f, "No root word available to start a round"),
        }
    }
}

impl std::error::Error for RoundError {}

/// One round: the root word, the words accepted so far and the score
///
/// Accepted words are kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    root_len: usize,
    root_letters: LetterCounts,
    accepted_words: Vec<String>,
    score: i64,
}

impl Session {
    /// Start a fresh round for `root_word`
    ///
    /// The root is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `RoundError::NoRootWord` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::Session;
    ///
    /// let session = Session::new(" SilkWorm ").unwrap();
    /// assert_eq!(session.root_word(), "silkworm");
    /// assert_eq!(session.score(), 0);
    /// assert!(Session::new("  ").is_err());
    /// ```
    pub fn new(root_word: &str) -> Result<Self, RoundError> {
        let root_word = root_word.trim().to_lowercase();
        if root_word.is_empty() {
            return Err(RoundError::NoRootWord);
        }

        Ok(Self {
            root_len: root_word.chars().count(),
            root_letters: LetterCounts::of(&root_word),
            root_word,
            accepted_words: Vec::new(),
            score: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Root word length in characters
    #[inline]
    #[must_use]
    pub const fn root_len(&self) -> usize {
        self.root_len
    }

    /// Letter counts of the root word
    #[inline]
    #[must_use]
    pub const fn root_letters(&self) -> &LetterCounts {
        &self.root_letters
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn has_accepted(&self, word: &str) -> bool {
        self.accepted_words.iter().any(|w| w == word)
    }

    /// Record an accepted word
    ///
    /// Only the controller calls this, after the engine has accepted `word`.
    pub(crate) fn record(&mut self, word: String, score_delta: i64) {
        self.accepted_words.insert(0, word);
        self.score += score_delta;
    }
}
