//! Dictionary lookup
//!
//! The engine only asks one question of a dictionary: is this a real word
//! in this language? How the answer is produced is up to the implementation.

use crate::core::LanguageTag;
use rustc_hash::FxHashSet;

/// Decides whether a normalized word is a recognized word of a language
pub trait Dictionary {
    /// Check a word that has already been trimmed and lowercased
    fn is_real_word(&self, word: &str, language: &LanguageTag) -> bool;
}

/// Closures make convenient stub dictionaries
impl<F> Dictionary for F
where
    F: Fn(&str, &LanguageTag) -> bool,
{
    fn is_real_word(&self, word: &str, language: &LanguageTag) -> bool {
        self(word, language)
    }
}

/// Dictionary backed by an in-memory word list for a single language
///
/// Lookups for any other language answer `false`.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: LanguageTag,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from words, normalizing each entry
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LanguageTag;
    /// use word_scramble::wordlists::{Dictionary, WordListDictionary};
    ///
    /// let en = LanguageTag::default();
    /// let dict = WordListDictionary::new(en.clone(), ["Silk", "worm"]);
    /// assert!(dict.is_real_word("silk", &en));
    /// assert!(!dict.is_real_word("silkworms", &en));
    /// ```
    pub fn new<I, S>(language: LanguageTag, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { language, words }
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> &LanguageTag {
        &self.language
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All known words, sorted
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &LanguageTag) -> bool {
        *language == self.language && self.words.contains(word)
    }
}
