//! Round lifecycle
//!
//! The controller is the only owner and mutator of the live `Session`.

use super::engine::ValidationEngine;
use super::session::{RoundError, Session};
use crate::core::{Candidate, Verdict};
use crate::wordlists::{Dictionary, RootWordSource};
use tracing::{info, warn};

/// Whether a round is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    NotStarted,
    InRound,
}

/// Owns the live round and applies the engine's verdicts to it
#[derive(Debug, Clone)]
pub struct SessionController<D> {
    engine: ValidationEngine<D>,
    session: Option<Session>,
}

impl<D: Dictionary> SessionController<D> {
    /// Create a controller with no round in progress
    pub const fn new(engine: ValidationEngine<D>) -> Self {
        Self {
            engine,
            session: None,
        }
    }

    #[inline]
    pub const fn engine(&self) -> &ValidationEngine<D> {
        &self.engine
    }

    /// The live round, if one has been started
    #[inline]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[inline]
    pub const fn state(&self) -> RoundState {
        if self.session.is_some() {
            RoundState::InRound
        } else {
            RoundState::NotStarted
        }
    }

    /// Discard the current round and start a new one
    ///
    /// History and score are reset and the root word is taken from `source`.
    ///
    /// # Errors
    /// Returns `RoundError::NoRootWord` when the source yields no usable
    /// word. The controller is then left in `RoundState::NotStarted`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LanguageTag;
    /// use word_scramble::game::{SessionController, ValidationEngine};
    ///
    /// let engine = ValidationEngine::new(|_: &str, _: &LanguageTag| true);
    /// let mut controller = SessionController::new(engine);
    ///
    /// let session = controller
    ///     .start_new_round(&mut || Some("silkworm".to_string()))
    ///     .unwrap();
    /// assert_eq!(session.root_word(), "silkworm");
    /// ```
    pub fn start_new_round<S>(&mut self, source: &mut S) -> Result<&Session, RoundError>
    where
        S: RootWordSource + ?Sized,
    {
        self.session = None;

        let root = source.pick_root_word().ok_or(RoundError::NoRootWord)?;
        let session = Session::new(&root)?;
        info!(root = session.root_word(), "started new round");

        Ok(&*self.session.insert(session))
    }

    /// Submit raw player input to the current round
    ///
    /// Accepted words are prepended to the history and their score added.
    /// Rejections leave the round untouched. Returns `None` for input that
    /// is empty after trimming, and when no round has been started.
    pub fn submit(&mut self, raw_input: &str) -> Option<Verdict> {
        let Some(session) = self.session.as_mut() else {
            warn!("candidate submitted before any round was started");
            return None;
        };

        let candidate = Candidate::normalize(raw_input)?;
        let verdict = self.engine.evaluate_candidate(session, &candidate);

        if let Verdict::Accepted { score_delta } = verdict {
            info!(word = candidate.text(), score_delta, "accepted word");
            session.record(candidate.into_string(), score_delta);
        }

        Some(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LanguageTag, Rejection};

    type StubDictionary = fn(&str, &LanguageTag) -> bool;

    fn silkworm_words(word: &str, _: &LanguageTag) -> bool {
        matches!(word, "worm" | "silk" | "milk" | "owl" | "slow")
    }

    fn controller() -> SessionController<StubDictionary> {
        SessionController::new(ValidationEngine::new(silkworm_words as StubDictionary))
    }

    fn fixed(root: &'static str) -> impl FnMut() -> Option<String> {
        move || Some(root.to_string())
    }

    fn rejected(reason: Rejection) -> Option<Verdict> {
        Some(Verdict::Rejected { reason })
    }

    #[test]
    fn starts_not_started() {
        let controller = controller();
        assert_eq!(controller.state(), RoundState::NotStarted);
        assert!(controller.session().is_none());
    }

    #[test]
    fn submit_before_round_is_noop() {
        let mut controller = controller();
        assert_eq!(controller.submit("worm"), None);
        assert_eq!(controller.state(), RoundState::NotStarted);
    }

    #[test]
    fn end_to_end_silkworm_round() {
        let mut controller = controller();
        controller.start_new_round(&mut fixed("silkworm")).unwrap();
        assert_eq!(controller.state(), RoundState::InRound);

        assert_eq!(
            controller.submit("worm"),
            Some(Verdict::Accepted { score_delta: 5 })
        );
        let session = controller.session().unwrap();
        assert_eq!(session.accepted_words(), ["worm"]);
        assert_eq!(session.score(), 5);

        assert_eq!(controller.submit("worm"), rejected(Rejection::AlreadyUsed));
        assert_eq!(controller.session().unwrap().score(), 5);

        assert_eq!(controller.submit("silkworm"), rejected(Rejection::SameAsRoot));
        assert_eq!(controller.submit("a"), rejected(Rejection::TooShort));
        assert_eq!(
            controller.submit("silkworms"),
            rejected(Rejection::NotSpellableFromRoot)
        );
        assert_eq!(controller.submit("work"), rejected(Rejection::NotARealWord));

        let session = controller.session().unwrap();
        assert_eq!(session.accepted_words(), ["worm"]);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut controller = controller();
        controller.start_new_round(&mut fixed("silkworm")).unwrap();

        controller.submit("worm");
        controller.submit("  SILK ");
        controller.submit("owl");

        let session = controller.session().unwrap();
        assert_eq!(session.accepted_words(), ["owl", "silk", "worm"]);
        assert_eq!(session.score(), 5 + 5 + 6);
    }

    #[test]
    fn repeated_submission_always_already_used() {
        let mut controller = controller();
        controller.start_new_round(&mut fixed("silkworm")).unwrap();
        controller.submit("milk");
        controller.submit("slow");

        for _ in 0..3 {
            assert_eq!(controller.submit("milk"), rejected(Rejection::AlreadyUsed));
        }
        assert_eq!(controller.session().unwrap().score(), 10);
    }

    #[test]
    fn empty_input_changes_nothing() {
        let mut controller = controller();
        controller.start_new_round(&mut fixed("silkworm")).unwrap();
        let before = controller.session().cloned();

        assert_eq!(controller.submit("   "), None);
        assert_eq!(controller.session().cloned(), before);
    }

    #[test]
    fn new_round_resets_history_and_score() {
        let mut controller = controller();
        controller.start_new_round(&mut fixed("silkworm")).unwrap();
        controller.submit("worm");

        let session = controller.start_new_round(&mut fixed("Listener")).unwrap();
        assert_eq!(session.root_word(), "listener");
        assert!(session.accepted_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn missing_root_word_is_fatal_for_the_round() {
        let mut controller = controller();
        controller.start_new_round(&mut fixed("silkworm")).unwrap();
        controller.submit("worm");

        let mut empty = || None::<String>;
        assert_eq!(
            controller.start_new_round(&mut empty).unwrap_err(),
            RoundError::NoRootWord
        );
        assert_eq!(controller.state(), RoundState::NotStarted);
        assert_eq!(controller.submit("silk"), None);

        let mut blank = fixed("   ");
        assert!(controller.start_new_round(&mut blank).is_err());
        assert_eq!(controller.state(), RoundState::NotStarted);
    }

    #[test]
    fn works_with_root_word_list() {
        use crate::wordlists::RootWordList;

        let mut roots = RootWordList::with_seed(["silkworm"], 1);
        let mut controller = controller();
        controller.start_new_round(&mut roots).unwrap();
        assert_eq!(
            controller.submit("silk"),
            Some(Verdict::Accepted { score_delta: 5 })
        );
    }
}
