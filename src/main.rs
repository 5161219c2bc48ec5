//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes, plus tools for exploring root words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_word, find_solutions, rank_roots, run_simple},
    core::LanguageTag,
    game::{SessionController, ValidationEngine},
    output::{print_check_result, print_rankings, print_solutions},
    wordlists::{DICTIONARY, ROOTS, RootWordList, WordListDictionary, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'builtin' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "builtin")]
    roots: String,

    /// Dictionary: 'builtin' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Language tag passed to the dictionary
    #[arg(short, long, global = true, default_value = LanguageTag::DEFAULT)]
    language: LanguageTag,

    /// Seed for picking root words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,
    },

    /// List every attainable word for a root word
    Solutions {
        /// The root word
        root: String,
    },

    /// Rank the root words by how many words they allow
    Rank {
        /// Number of roots to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },
}

/// Load a word list: the embedded one for "builtin", otherwise a file
fn load_word_list(source: &str, builtin: &[&str], what: &str) -> Result<Vec<String>> {
    let words = match source {
        "builtin" => loader::words_from_slice(builtin),
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to load {what} from {path}"))?,
    };

    if words.is_empty() {
        bail!("{what} list '{source}' contains no words");
    }
    Ok(words)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let root_words = load_word_list(&cli.roots, ROOTS, "root word")?;
    let dictionary_words = load_word_list(&cli.dictionary, DICTIONARY, "dictionary")?;
    tracing::debug!(
        roots = root_words.len(),
        dictionary = dictionary_words.len(),
        language = %cli.language,
        "word lists loaded"
    );

    let dictionary = WordListDictionary::new(cli.language.clone(), &dictionary_words);
    let engine = ValidationEngine::with_language(dictionary, cli.language);

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let roots = root_list(root_words, cli.seed);
            run_play_command(engine, roots)
        }
        Commands::Simple => {
            let mut roots = root_list(root_words, cli.seed);
            let mut controller = SessionController::new(engine);
            run_simple(&mut controller, &mut roots)
        }
        Commands::Check { root, word } => {
            let result = check_word(&engine, &root, &word)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Solutions { root } => {
            let result = find_solutions(&engine, &root, &dictionary_words)?;
            print_solutions(&result);
            Ok(())
        }
        Commands::Rank { top } => {
            println!("Ranking {} root words...", root_words.len());
            let rankings = rank_roots(&engine, &root_words, &dictionary_words, true);
            print_rankings(&rankings, top);
            Ok(())
        }
    }
}

fn root_list(words: Vec<String>, seed: Option<u64>) -> RootWordList {
    match seed {
        Some(seed) => RootWordList::with_seed(words, seed),
        None => RootWordList::new(words),
    }
}

fn run_play_command(
    engine: ValidationEngine<WordListDictionary>,
    roots: RootWordList,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(SessionController::new(engine), roots)?;
    run_tui(app)
}
