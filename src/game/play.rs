//! One interactive game

use super::prompter::Prompter;
use crate::core::{Guess, History, MAX_ATTEMPTS, Word};
use crate::wordlists::{WordBank, todays_solution};
use rand::prelude::IndexedRandom;
use std::io;

/// How a game ended
#[derive(Debug, Clone)]
pub struct GameResult {
    pub solution: Word,
    pub history: History,
    pub solved: bool,
}

/// A game against a fixed solution
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
}

impl Game {
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self { solution }
    }

    /// Today's answer, or `None` if the bank has no answers
    #[must_use]
    pub fn daily(bank: &WordBank) -> Option<Self> {
        todays_solution(bank.answers()).cloned().map(Self::new)
    }

    /// A random answer for practice
    #[must_use]
    pub fn random(bank: &WordBank) -> Option<Self> {
        bank.answers()
            .choose(&mut rand::rng())
            .cloned()
            .map(Self::new)
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Play up to [`MAX_ATTEMPTS`] guesses read from `prompter`
    ///
    /// `on_guess` sees every scored guess. The game ends on a correct guess,
    /// after the last attempt, or when the prompter runs out of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the prompter.
    pub fn play(
        &self,
        prompter: &mut impl Prompter,
        mut on_guess: impl FnMut(&Guess),
    ) -> io::Result<GameResult> {
        let mut history = History::new();
        let mut solved = false;

        for attempt in 0..MAX_ATTEMPTS {
            let Some(word) = prompter.prompt_guess(MAX_ATTEMPTS - attempt)? else {
                break;
            };
            let guess = Guess::score(&word, &self.solution);
            on_guess(&guess);
            solved = guess.is_solved();
            history.push(guess);
            if solved {
                break;
            }
        }

        Ok(GameResult {
            solution: self.solution.clone(),
            history,
            solved,
        })
    }
}
