//! Interactive Wordle
//!
//! The player types guesses, each is validated against the acceptable
//! word list and scored against the solution.

mod play;
mod prompter;
mod validator;

pub use play::{Game, GameResult};
pub use prompter::{LinePrompter, Prompter};
pub use validator::{GuessError, check_guess};
