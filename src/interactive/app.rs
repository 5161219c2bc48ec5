//! TUI application state and logic

use crate::commands::find_solutions;
use crate::core::Verdict;
use crate::game::{RoundError, Session, SessionController};
use crate::output::formatters::{rejection_message, rejection_title};
use crate::wordlists::{RootWordList, WordListDictionary};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub controller: SessionController<WordListDictionary>,
    pub roots: RootWordList,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Words the dictionary allows for the current root
    pub attainable: usize,
    /// Points for finding all of them
    pub max_score: i64,
    pub rounds_played: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NoRootWord` if the roots list has nothing to offer.
    pub fn new(
        controller: SessionController<WordListDictionary>,
        roots: RootWordList,
    ) -> Result<Self, RoundError> {
        let mut app = Self {
            controller,
            roots,
            input_buffer: String::new(),
            messages: Vec::new(),
            attainable: 0,
            max_score: 0,
            rounds_played: 0,
            should_quit: false,
        };
        app.new_round()?;
        Ok(app)
    }

    /// Discard the current round and start another
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NoRootWord` if no root word could be picked.
    pub fn new_round(&mut self) -> Result<(), RoundError> {
        let root = self
            .controller
            .start_new_round(&mut self.roots)?
            .root_word()
            .to_string();

        let solutions = {
            let engine = self.controller.engine();
            let words = engine.dictionary().sorted_words();
            find_solutions(engine, &root, &words)?
        };
        self.attainable = solutions.solutions.len();
        self.max_score = solutions.max_score;

        self.rounds_played += 1;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            &format!(
                "New root word: {}. {} words to find!",
                root.to_uppercase(),
                self.attainable
            ),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(verdict) = self.controller.submit(&input) else {
            return;
        };
        let root = self.root_word().to_string();
        let word = input.trim().to_uppercase();

        match verdict {
            Verdict::Accepted { score_delta } => {
                self.add_message(&format!("{word} +{score_delta}"), MessageStyle::Success);
                if self.found() == self.attainable && self.attainable > 0 {
                    self.add_message(
                        "🎉 You found every word! Ctrl+N for a new root word.",
                        MessageStyle::Success,
                    );
                }
            }
            Verdict::Rejected { reason } => {
                self.add_message(
                    &format!(
                        "{}: {}",
                        rejection_title(reason),
                        rejection_message(reason, &root)
                    ),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        self.controller.session().map_or("", Session::root_word)
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.controller.session().map_or(0, Session::score)
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        self.controller
            .session()
            .map(Session::accepted_words)
            .unwrap_or_default()
    }

    /// Number of words found this round
    #[must_use]
    pub fn found(&self) -> usize {
        self.accepted_words().len()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_round()?,
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LanguageTag;
    use crate::game::ValidationEngine;

    fn app_with_root(root: &str) -> App {
        let dict = WordListDictionary::new(LanguageTag::default(), ["worm", "silk", "milk", "owl"]);
        let controller = SessionController::new(ValidationEngine::new(dict));
        App::new(controller, RootWordList::with_seed([root], 3)).unwrap()
    }

    fn type_and_submit(app: &mut App, text: &str) {
        app.input_buffer.push_str(text);
        app.submit_input();
    }

    #[test]
    fn first_round_started_on_creation() {
        let app = app_with_root("silkworm");
        assert_eq!(app.root_word(), "silkworm");
        assert_eq!(app.attainable, 4);
        assert_eq!(app.max_score, 5 + 5 + 5 + 6);
        assert_eq!(app.rounds_played, 1);
    }

    #[test]
    fn empty_roots_list_fails() {
        let dict = WordListDictionary::new(LanguageTag::default(), ["worm"]);
        let controller = SessionController::new(ValidationEngine::new(dict));
        let roots = RootWordList::new(Vec::<String>::new());

        assert!(matches!(
            App::new(controller, roots),
            Err(RoundError::NoRootWord)
        ));
    }

    #[test]
    fn accepted_word_updates_score_and_history() {
        let mut app = app_with_root("silkworm");
        type_and_submit(&mut app, "worm");
        type_and_submit(&mut app, "owl");

        assert_eq!(app.score(), 11);
        assert_eq!(app.accepted_words(), ["owl", "worm"]);
        assert!(app.input_buffer.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "OWL +6");
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn rejection_shows_title_and_message() {
        let mut app = app_with_root("silkworm");
        type_and_submit(&mut app, "zebra");

        let last = app.messages.last().unwrap();
        assert_eq!(
            last.text,
            "Word not possible: You can't spell that word from 'silkworm'!"
        );
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.score(), 0);
    }

    #[test]
    fn blank_submission_is_silent() {
        let mut app = app_with_root("silkworm");
        let before = app.messages.len();
        type_and_submit(&mut app, "   ");
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn finding_everything_is_celebrated() {
        let mut app = app_with_root("silkworm");
        for word in ["worm", "silk", "milk", "owl"] {
            type_and_submit(&mut app, word);
        }
        assert_eq!(app.found(), app.attainable);
        assert!(app.messages.last().unwrap().text.contains("every word"));
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app_with_root("silkworm");
        for _ in 0..10 {
            type_and_submit(&mut app, "xx");
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn new_round_resets() {
        let mut app = app_with_root("silkworm");
        type_and_submit(&mut app, "worm");
        app.new_round().unwrap();

        assert_eq!(app.score(), 0);
        assert!(app.accepted_words().is_empty());
        assert_eq!(app.rounds_played, 2);
    }
}
