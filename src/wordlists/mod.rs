//! Word lists and the collaborators built on them
//!
//! Provides embedded word lists compiled into the binary, a file loader,
//! the root word source and the dictionary.

mod dictionary;
mod embedded;
pub mod loader;
mod provider;

pub use dictionary::{Dictionary, WordListDictionary};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOTS, ROOTS_COUNT};
pub use provider::{RootWordList, RootWordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_count_matches_const() {
        assert_eq!(ROOTS.len(), ROOTS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn roots_are_normalized_and_long_enough() {
        for &root in ROOTS {
            assert!(root.chars().count() >= 3, "Root '{root}' is too short");
            assert!(
                root.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{root}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_blank_entries() {
        assert!(DICTIONARY.iter().all(|w| !w.trim().is_empty()));
    }

    #[test]
    fn dictionary_knows_silkworm_words() {
        for word in ["silk", "worm", "milk", "owl"] {
            assert!(DICTIONARY.contains(&word), "'{word}' missing");
        }
        assert!(!DICTIONARY.contains(&"silkworms"));
        assert!(ROOTS.contains(&"silkworm"));
    }
}
