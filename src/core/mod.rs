//! Core domain types for the word scramble game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and cheap to construct.

mod candidate;
mod language;
mod letters;
mod verdict;

pub use candidate::Candidate;
pub use language::{LanguageTag, LanguageTagError};
pub use letters::LetterCounts;
pub use verdict::{Rejection, Verdict};
