//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::Verdict;
use crate::game::SessionController;
use crate::output::formatters::verdict_summary;
use crate::wordlists::{Dictionary, RootWordSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error, or if no root word is
/// available to start a round.
pub fn run_simple<D, S>(controller: &mut SessionController<D>, roots: &mut S) -> Result<()>
where
    D: Dictionary,
    S: RootWordSource + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(controller, roots, stdin.lock(), stdout.lock())
}

/// Play rounds reading one line of input per submission
///
/// Lines starting with `:` are commands; everything else is submitted as a
/// word. Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if no root word is
/// available to start a round.
pub fn play_lines<D, S, R, W>(
    controller: &mut SessionController<D>,
    roots: &mut S,
    input: R,
    mut output: W,
) -> Result<()>
where
    D: Dictionary,
    S: RootWordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                Word Scramble - Interactive Mode              ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make words from the letters of the root word.")?;
    writeln!(output, "Shorter words score more. Words need at least 3 letters.\n")?;
    writeln!(output, "Commands: ':new' new root word, ':words' your words, ':quit' to exit\n")?;

    start_round(controller, roots, &mut output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("failed to read input")?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => start_round(controller, roots, &mut output)?,
            ":words" | ":w" => print_words(controller, &mut output)?,
            ":help" | ":h" => {
                writeln!(output, "Commands: ':new', ':words', ':quit'")?;
            }
            word => submit_word(controller, word, &mut output)?,
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn start_round<D, S, W>(
    controller: &mut SessionController<D>,
    roots: &mut S,
    output: &mut W,
) -> Result<()>
where
    D: Dictionary,
    S: RootWordSource + ?Sized,
    W: Write,
{
    let session = controller
        .start_new_round(roots)
        .context("cannot start a round")?;

    writeln!(output, "{}", "─".repeat(60))?;
    writeln!(
        output,
        "Root word: {}",
        session.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "{}", "─".repeat(60))?;
    Ok(())
}

fn submit_word<D, W>(controller: &mut SessionController<D>, word: &str, output: &mut W) -> Result<()>
where
    D: Dictionary,
    W: Write,
{
    let Some(verdict) = controller.submit(word) else {
        return Ok(());
    };
    let Some(session) = controller.session() else {
        return Ok(());
    };

    let summary = verdict_summary(verdict, &word.to_lowercase(), session.root_word());
    match verdict {
        Verdict::Accepted { .. } => {
            writeln!(output, "✅ {}", summary.green())?;
            writeln!(output, "   Score: {}", session.score().to_string().bold())?;
        }
        Verdict::Rejected { .. } => writeln!(output, "❌ {}", summary.red())?,
    }
    Ok(())
}

fn print_words<D, W>(controller: &SessionController<D>, output: &mut W) -> Result<()>
where
    D: Dictionary,
    W: Write,
{
    let Some(session) = controller.session() else {
        return Ok(());
    };

    if session.accepted_words().is_empty() {
        writeln!(output, "No words yet.")?;
        return Ok(());
    }

    for word in session.accepted_words() {
        writeln!(output, "  • {}", word.to_uppercase())?;
    }
    writeln!(output, "   Score: {}", session.score())?;
    Ok(())
}
