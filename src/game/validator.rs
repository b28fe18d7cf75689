//! Guess validation

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::WordBank;
use thiserror::Error;

/// Why a typed guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Input must be letters A-Z")]
    NotAlphabetic,

    #[error("Input must be exactly 5 letters")]
    WrongLength,

    #[error("Not a valid word")]
    UnknownWord,
}

/// Check a typed guess against the acceptable guesses in `bank`
///
/// Input is lowercased first. Checks run in order: letters only, then
/// length, then the word list, and the first failure is returned.
///
/// # Errors
///
/// Returns the [`GuessError`] for the first check that fails.
///
/// # Examples
/// ```
/// use wordle_autoplay::game::{GuessError, check_guess};
/// use wordle_autoplay::wordlists::WordBank;
///
/// let bank = WordBank::from_lists(&["tears"], &[], &[]);
/// assert_eq!(check_guess("TEARS", &bank).unwrap().text(), "tears");
/// assert_eq!(check_guess("tea", &bank), Err(GuessError::WrongLength));
/// ```
pub fn check_guess(input: &str, bank: &WordBank) -> Result<Word, GuessError> {
    let input = input.to_lowercase();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GuessError::NotAlphabetic);
    }
    if input.len() != WORD_LENGTH {
        return Err(GuessError::WrongLength);
    }
    if !bank.is_acceptable(&input) {
        return Err(GuessError::UnknownWord);
    }
    Word::new(input).map_err(|_| GuessError::WrongLength)
}
