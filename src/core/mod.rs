//! Core domain types for Wordle
//!
//! Words, correctness marks, scored guesses and the guess history.
//! Everything here is pure and synchronous.

mod feedback;
mod guess;
mod history;
mod word;

pub use feedback::{Correctness, Feedback};
pub use guess::Guess;
pub use history::{Chain, History};
pub use word::{Word, WordError};

/// Letters in every word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
