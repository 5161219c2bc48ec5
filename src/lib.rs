//! Word Scramble
//!
//! A single-player word game: make as many words as you can from the letters
//! of a root word. Shorter words are worth more.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{LanguageTag, Verdict};
//! use word_scramble::game::{SessionController, ValidationEngine};
//! use word_scramble::wordlists::{DICTIONARY, WordListDictionary};
//!
//! let dictionary = WordListDictionary::new(LanguageTag::default(), DICTIONARY);
//! let mut controller = SessionController::new(ValidationEngine::new(dictionary));
//!
//! controller
//!     .start_new_round(&mut || Some("silkworm".to_string()))
//!     .unwrap();
//! assert_eq!(
//!     controller.submit("worm"),
//!     Some(Verdict::Accepted { score_delta: 5 })
//! );
//! ```

// Core domain types
pub mod core;

// Round state and validation
pub mod game;

// Word lists, root word source and dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
