//! Outcome of evaluating a candidate

use std::fmt;

/// Why a candidate was turned down
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The candidate is the root word itself
    SameAsRoot,
    /// The candidate has fewer than three letters
    TooShort,
    /// The candidate was already accepted this round
    AlreadyUsed,
    /// The root word lacks a letter the candidate needs
    NotSpellableFromRoot,
    /// The dictionary does not know the candidate
    NotARealWord,
}

impl Rejection {
    /// All reasons, in check order
    pub const ALL: [Self; 5] = [
        Self::SameAsRoot,
        Self::TooShort,
        Self::AlreadyUsed,
        Self::NotSpellableFromRoot,
        Self::NotARealWord,
    ];
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SameAsRoot => "same as root",
            Self::TooShort => "too short",
            Self::AlreadyUsed => "already used",
            Self::NotSpellableFromRoot => "not spellable from root",
            Self::NotARealWord => "not a real word",
        };
        f.write_str(name)
    }
}

/// Verdict on a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted { score_delta: i64 },
    Rejected { reason: Rejection },
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

impl From<Rejection> for Verdict {
    fn from(reason: Rejection) -> Self {
        Self::Rejected { reason }
    }
}
