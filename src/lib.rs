//! Wordle Autoplay
//!
//! A terminal Wordle clone with a solver that plays itself by filtering a
//! commonness-ordered dictionary through the feedback of every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_autoplay::core::{Guess, Word};
//!
//! let guess = Word::new("sheep").unwrap();
//! let solution = Word::new("spelt").unwrap();
//!
//! let scored = Guess::score(&guess, &solution);
//! assert_eq!(scored.feedback().to_string(), "G-G-Y");
//! ```
//!
//! Simulating games against the embedded answers:
//!
//! ```rust,no_run
//! use wordle_autoplay::solver::{AutoSolver, SolverConfig};
//! use wordle_autoplay::wordlists::{EmbeddedSource, WordBank};
//!
//! let bank = WordBank::load(&EmbeddedSource);
//! let mut solver = AutoSolver::from_bank(&bank, SolverConfig::default());
//! let stats = solver.run(bank.answers());
//! println!("won {}/{}", stats.wins, stats.games);
//! ```

// Core domain types
pub mod core;

// Filtering, elimination and autoplay
pub mod solver;

// Word lists
pub mod wordlists;

// Interactive game
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
