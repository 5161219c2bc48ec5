//! Formatting utilities for terminal output
//!
//! Wording shown to players lives here; the engine only deals in reasons.

use crate::core::{Rejection, Verdict};

/// Alert title for a rejection
#[must_use]
pub const fn rejection_title(reason: Rejection) -> &'static str {
    match reason {
        Rejection::SameAsRoot => "Word is the root",
        Rejection::TooShort => "Word too short",
        Rejection::AlreadyUsed => "Word used already",
        Rejection::NotSpellableFromRoot => "Word not possible",
        Rejection::NotARealWord => "Word not recognized",
    }
}

/// Alert message for a rejection
#[must_use]
pub fn rejection_message(reason: Rejection, root: &str) -> String {
    match reason {
        Rejection::SameAsRoot => "You can't just reuse the root word!".to_string(),
        Rejection::TooShort => "Words must be at least 3 letters long.".to_string(),
        Rejection::AlreadyUsed => "Be more original!".to_string(),
        Rejection::NotSpellableFromRoot => format!("You can't spell that word from '{root}'!"),
        Rejection::NotARealWord => "You can't just make them up, you know!".to_string(),
    }
}

/// One-line, uncolored summary of a verdict
#[must_use]
pub fn verdict_summary(verdict: Verdict, word: &str, root: &str) -> String {
    match verdict {
        Verdict::Accepted { score_delta } => {
            let unit = if score_delta == 1 { "point" } else { "points" };
            format!("{} +{score_delta} {unit}", word.to_uppercase())
        }
        Verdict::Rejected { reason } => format!(
            "{}: {}",
            rejection_title(reason),
            rejection_message(reason, root)
        ),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
