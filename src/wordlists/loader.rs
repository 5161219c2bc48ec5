//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize a single list entry, skipping blanks
fn normalize_entry(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Load words from a file, one per line
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/roots.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_entry).collect())
}

/// Convert an embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOTS;
///
/// let words = words_from_slice(ROOTS);
/// assert_eq!(words.len(), ROOTS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_entry(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silk", "  worm ", "MILK"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk", "worm", "milk"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["silk", "", "   ", "worm"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk", "worm"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Listen\n\n  silkworm  \nrainbow").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["listen", "silkworm", "rainbow"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("nope.txt"));
        assert!(result.is_err());
    }
}
