//! Every word a round could accept
//!
//! Runs each word of a list through the engine against a fresh round, in
//! parallel, and keeps the ones that would be accepted.

use crate::core::{Candidate, Verdict};
use crate::game::{RoundError, Session, ValidationEngine};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// An attainable word and the points it is worth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: String,
    pub score: i64,
}

/// All attainable words for a root
pub struct SolutionsResult {
    pub root: String,
    /// Highest score first, then alphabetical
    pub solutions: Vec<Solution>,
    /// Score for finding every solution
    pub max_score: i64,
}

/// Find every word in `words` that a fresh round for `root` would accept
///
/// # Errors
///
/// Returns `RoundError::NoRootWord` if `root` is blank.
pub fn find_solutions<D, S>(
    engine: &ValidationEngine<D>,
    root: &str,
    words: &[S],
) -> Result<SolutionsResult, RoundError>
where
    D: Dictionary + Sync,
    S: AsRef<str> + Sync,
{
    let session = Session::new(root)?;

    let mut solutions: Vec<Solution> = words
        .par_iter()
        .filter_map(|word| {
            let candidate = Candidate::normalize(word.as_ref())?;
            match engine.evaluate_candidate(&session, &candidate) {
                Verdict::Accepted { score_delta } => Some(Solution {
                    word: candidate.into_string(),
                    score: score_delta,
                }),
                Verdict::Rejected { .. } => None,
            }
        })
        .collect();

    solutions.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    solutions.dedup_by(|a, b| a.word == b.word);

    let max_score = solutions.iter().map(|s| s.score).sum();

    Ok(SolutionsResult {
        root: session.root_word().to_string(),
        solutions,
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LanguageTag;

    fn accept_all(_: &str, _: &LanguageTag) -> bool {
        true
    }

    #[test]
    fn finds_spellable_words_only() {
        let engine = ValidationEngine::new(accept_all);
        let words = ["line", "lisp", "silent", "listen", "ll", "net", "tens"];

        let result = find_solutions(&engine, "listen", &words).unwrap();
        let found: Vec<&str> = result.solutions.iter().map(|s| s.word.as_str()).collect();

        assert_eq!(found, vec!["net", "line", "tens", "silent"]);
        assert_eq!(result.max_score, 4 + 3 + 3 + 1);
    }

    #[test]
    fn respects_dictionary() {
        let engine = ValidationEngine::new(|w: &str, _: &LanguageTag| w != "tens");
        let result = find_solutions(&engine, "listen", &["tens", "nets"]).unwrap();

        assert_eq!(
            result.solutions,
            vec![Solution {
                word: "nets".to_string(),
                score: 3
            }]
        );
    }

    #[test]
    fn duplicate_entries_counted_once() {
        let engine = ValidationEngine::new(accept_all);
        let words = vec!["Worm".to_string(), "worm".to_string(), " WORM ".to_string()];

        let result = find_solutions(&engine, "silkworm", &words).unwrap();
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.max_score, 5);
    }

    #[test]
    fn builtin_lists_have_silkworm_solutions() {
        use crate::wordlists::{DICTIONARY, WordListDictionary};

        let dict = WordListDictionary::new(LanguageTag::default(), DICTIONARY);
        let engine = ValidationEngine::new(dict);
        let result = find_solutions(&engine, "silkworm", DICTIONARY).unwrap();

        assert!(result.solutions.iter().any(|s| s.word == "worm"));
        assert!(result.solutions.iter().all(|s| s.word != "silkworm"));
        assert!(result.solutions.iter().all(|s| s.word.chars().count() >= 3));
    }

    #[test]
    fn blank_root_errors() {
        let engine = ValidationEngine::new(accept_all);
        assert!(find_solutions(&engine, "", &["abc"]).is_err());
    }
}
