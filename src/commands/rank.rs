//! Rank root words by how much they offer
//!
//! Useful for curating a roots list: a root with few attainable words makes
//! for a short round.

use super::solutions::find_solutions;
use crate::game::ValidationEngine;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Summary of one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootRanking {
    pub root: String,
    pub attainable: usize,
    pub max_score: i64,
}

/// Count attainable words for every root, richest roots first
///
/// Blank roots are skipped. Ties are broken by maximum score, then
/// alphabetically.
pub fn rank_roots<D, R, W>(
    engine: &ValidationEngine<D>,
    roots: &[R],
    words: &[W],
    show_progress: bool,
) -> Vec<RootRanking>
where
    D: Dictionary + Sync,
    R: AsRef<str> + Sync,
    W: AsRef<str> + Sync,
{
    let pb = if show_progress {
        ProgressBar::new(roots.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("ranking roots");

    let mut rankings: Vec<RootRanking> = roots
        .par_iter()
        .filter_map(|root| {
            let result = find_solutions(engine, root.as_ref(), words).ok();
            pb.inc(1);
            result.map(|r| RootRanking {
                attainable: r.solutions.len(),
                max_score: r.max_score,
                root: r.root,
            })
        })
        .collect();

    pb.finish_and_clear();

    rankings.sort_by(|a, b| {
        b.attainable
            .cmp(&a.attainable)
            .then_with(|| b.max_score.cmp(&a.max_score))
            .then_with(|| a.root.cmp(&b.root))
    });
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LanguageTag;

    fn accept_all(_: &str, _: &LanguageTag) -> bool {
        true
    }

    #[test]
    fn richest_root_first() {
        let engine = ValidationEngine::new(accept_all);
        let words = ["cat", "act", "tack", "ton", "not"];
        let roots = ["attack", "onto", "zzz"];

        let rankings = rank_roots(&engine, &roots, &words, false);

        assert_eq!(rankings.len(), 3);
        assert_eq!(rankings[0].root, "attack");
        assert_eq!(rankings[0].attainable, 3);
        assert_eq!(rankings[1].root, "onto");
        assert_eq!(rankings[1].attainable, 2);
        assert_eq!(rankings[2].root, "zzz");
        assert_eq!(rankings[2].attainable, 0);
        assert_eq!(rankings[2].max_score, 0);
    }

    #[test]
    fn blank_roots_skipped() {
        let engine = ValidationEngine::new(accept_all);
        let rankings = rank_roots(&engine, &["", "onto"], &["not"], false);

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].root, "onto");
    }

    #[test]
    fn ties_broken_alphabetically() {
        let engine = ValidationEngine::new(accept_all);
        let rankings = rank_roots(&engine, &["tops", "pots"], &["top"], false);

        let roots: Vec<&str> = rankings.iter().map(|r| r.root.as_str()).collect();
        assert_eq!(roots, vec!["pots", "tops"]);
    }
}
