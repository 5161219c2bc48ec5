//! Root word selection

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Supplies the root word for a new round
///
/// Returning `None` means no usable root word exists; the round cannot start.
pub trait RootWordSource {
    fn pick_root_word(&mut self) -> Option<String>;
}

impl<F> RootWordSource for F
where
    F: FnMut() -> Option<String>,
{
    fn pick_root_word(&mut self) -> Option<String> {
        self()
    }
}

/// Picks root words uniformly at random from a fixed list
#[derive(Debug, Clone)]
pub struct RootWordList {
    words: Vec<String>,
    rng: StdRng,
}

impl RootWordList {
    /// Create a picker seeded from the operating system
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a picker that yields the same sequence for the same seed
    pub fn with_seed<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng<I, S>(words: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words, rng }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RootWordSource for RootWordList {
    fn pick_root_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_from_list() {
        let mut list = RootWordList::new(["silkworm", "listener"]);
        for _ in 0..20 {
            let word = list.pick_root_word().unwrap();
            assert!(word == "silkworm" || word == "listener");
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut list = RootWordList::new(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.pick_root_word(), None);

        let mut blanks = RootWordList::new(["", "   "]);
        assert_eq!(blanks.pick_root_word(), None);
    }

    #[test]
    fn same_seed_same_sequence() {
        let words = ["absolute", "alphabet", "backpack", "barnacle", "blankets"];
        let mut a = RootWordList::with_seed(words, 7);
        let mut b = RootWordList::with_seed(words, 7);
        for _ in 0..10 {
            assert_eq!(a.pick_root_word(), b.pick_root_word());
        }
    }

    #[test]
    fn entries_are_normalized() {
        let mut list = RootWordList::new(["  SilkWorm "]);
        assert_eq!(list.words(), ["silkworm"]);
        assert_eq!(list.pick_root_word().as_deref(), Some("silkworm"));
    }

    #[test]
    fn closure_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            Some("rainbows".to_string())
        };
        assert_eq!(source.pick_root_word().as_deref(), Some("rainbows"));
        drop(source);
        assert_eq!(calls, 1);
    }
}
