//! Wordle Autoplay - CLI
//!
//! Play Wordle in the terminal, or let the solver play against the known answers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_autoplay::{
    commands::{SolveOptions, run_solve, run_start},
    core::Word,
    solver::SolverConfig,
    wordlists::{DictionarySource, DirectorySource, EmbeddedSource, WordBank},
};

#[derive(Parser)]
#[command(
    name = "wordle_autoplay",
    about = "Wordle in the terminal, with a solver that plays itself",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word lists: 'embedded' (default) or a directory holding
    /// wordlist.txt, common_words.txt and real_wordles.txt
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's Wordle
    Start {
        /// Play a random answer instead of today's
        #[arg(long)]
        random: bool,
    },

    /// Let the solver play against the known answers
    Solve {
        /// Print every guess instead of a progress bar
        #[arg(short, long)]
        debug: bool,

        /// Never play elimination guesses
        #[arg(long)]
        hard: bool,

        /// Number of answers to play
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Play a single game against this word
        #[arg(long)]
        solution: Option<String>,
    },
}

fn load_bank(wordlist: &str) -> WordBank {
    let source: Box<dyn DictionarySource> = match wordlist {
        "embedded" => Box::new(EmbeddedSource),
        dir => Box::new(DirectorySource::new(dir)),
    };
    WordBank::load(source.as_ref())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let bank = load_bank(&cli.wordlist);

    match cli.command {
        Commands::Start { random } => run_start(&bank, random).map(|_| ()),
        Commands::Solve {
            debug,
            hard,
            iterations,
            solution,
        } => {
            let solution = solution
                .map(|s| Word::new(&s).with_context(|| format!("invalid solution '{s}'")))
                .transpose()?;
            let config = SolverConfig {
                hard,
                iterations,
                solution,
                ..SolverConfig::default()
            };
            run_solve(&bank, SolveOptions { debug, config }).map(|_| ())
        }
    }
}
