//! Single-candidate check
//!
//! Evaluates one candidate against a fresh round, without playing.

use crate::core::Verdict;
use crate::game::{RoundError, Session, ValidationEngine};
use crate::wordlists::Dictionary;

/// Result of checking a candidate
pub struct CheckResult {
    pub root: String,
    pub input: String,
    /// `None` when the input was empty after trimming
    pub verdict: Option<Verdict>,
}

/// Evaluate `input` as the first guess of a round for `root`
///
/// # Errors
///
/// Returns `RoundError::NoRootWord` if `root` is blank.
pub fn check_word<D: Dictionary>(
    engine: &ValidationEngine<D>,
    root: &str,
    input: &str,
) -> Result<CheckResult, RoundError> {
    let session = Session::new(root)?;
    let verdict = engine.evaluate(&session, input);

    Ok(CheckResult {
        root: session.root_word().to_string(),
        input: input.trim().to_lowercase(),
        verdict,
    })
}
