//! Candidate validation pipeline
//!
//! Checks run in a fixed order and stop at the first failure, so the order
//! decides which reason a player sees when several checks would fail:
//!
//! 1. identity: not the root word itself
//! 2. length: at least [`MIN_CANDIDATE_LEN`] characters
//! 3. originality: not accepted earlier this round
//! 4. spellability: letters drawn from the root without reuse
//! 5. realness: known to the dictionary

use super::scoring::score_delta;
use super::session::Session;
use crate::core::{Candidate, LanguageTag, Rejection, Verdict};
use crate::wordlists::Dictionary;
use tracing::debug;

/// Shortest candidate that can be accepted
pub const MIN_CANDIDATE_LEN: usize = 3;

/// Stateless judge of candidates against a round
///
/// Holds only the dictionary and the language to query it with; every
/// verdict is a function of the session snapshot and the input.
#[derive(Debug, Clone)]
pub struct ValidationEngine<D> {
    dictionary: D,
    language: LanguageTag,
}

impl<D: Dictionary> ValidationEngine<D> {
    /// Create an engine that queries `dictionary` in English
    pub fn new(dictionary: D) -> Self {
        Self::with_language(dictionary, LanguageTag::default())
    }

    pub const fn with_language(dictionary: D, language: LanguageTag) -> Self {
        Self {
            dictionary,
            language,
        }
    }

    #[inline]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[inline]
    pub const fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Evaluate raw player input against `session`
    ///
    /// Returns `None` when the input is empty after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{LanguageTag, Rejection, Verdict};
    /// use word_scramble::game::{Session, ValidationEngine};
    ///
    /// let engine = ValidationEngine::new(|word: &str, _: &LanguageTag| word == "worm");
    /// let session = Session::new("silkworm").unwrap();
    ///
    /// assert_eq!(
    ///     engine.evaluate(&session, "Worm"),
    ///     Some(Verdict::Accepted { score_delta: 5 })
    /// );
    /// assert_eq!(
    ///     engine.evaluate(&session, "ox"),
    ///     Some(Verdict::Rejected { reason: Rejection::TooShort })
    /// );
    /// assert_eq!(engine.evaluate(&session, "   "), None);
    /// ```
    pub fn evaluate(&self, session: &Session, raw_input: &str) -> Option<Verdict> {
        let candidate = Candidate::normalize(raw_input)?;
        Some(self.evaluate_candidate(session, &candidate))
    }

    /// Evaluate an already-normalized candidate
    pub fn evaluate_candidate(&self, session: &Session, candidate: &Candidate) -> Verdict {
        let verdict = match self.first_failure(session, candidate) {
            Some(reason) => Verdict::Rejected { reason },
            None => Verdict::Accepted {
                score_delta: score_delta(session.root_len(), candidate.len()),
            },
        };

        debug!(
            root = session.root_word(),
            candidate = candidate.text(),
            ?verdict,
            "evaluated candidate"
        );
        verdict
    }

    fn first_failure(&self, session: &Session, candidate: &Candidate) -> Option<Rejection> {
        let word = candidate.text();

        if word == session.root_word() {
            return Some(Rejection::SameAsRoot);
        }

        if candidate.len() < MIN_CANDIDATE_LEN {
            return Some(Rejection::TooShort);
        }

        if session.has_accepted(word) {
            return Some(Rejection::AlreadyUsed);
        }

        if !candidate
            .letter_counts()
            .is_subset_of(session.root_letters())
        {
            return Some(Rejection::NotSpellableFromRoot);
        }

        if !self.dictionary.is_real_word(word, &self.language) {
            return Some(Rejection::NotARealWord);
        }

        None
    }
}
