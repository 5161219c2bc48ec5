//! Command implementations

pub mod check;
pub mod rank;
pub mod simple;
pub mod solutions;

pub use check::{CheckResult, check_word};
pub use rank::{RootRanking, rank_roots};
pub use simple::{play_lines, run_simple};
pub use solutions::{Solution, SolutionsResult, find_solutions};
