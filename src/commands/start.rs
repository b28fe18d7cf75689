//! Interactive game command

use crate::game::{Game, GameResult, LinePrompter};
use crate::output::{print_guess, print_loss, print_win};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};

/// Play today's answer, or a random one for practice
///
/// # Errors
///
/// Returns an error if there are no answers to choose from or reading the
/// terminal fails.
pub fn run_start(bank: &WordBank, random: bool) -> Result<GameResult> {
    let game = if random {
        Game::random(bank)
    } else {
        Game::daily(bank)
    }
    .context("no answers available to pick a solution from")?;

    let mut prompter = LinePrompter::stdin(bank);
    let result = game
        .play(&mut prompter, print_guess)
        .context("failed to read guess")?;

    if result.solved {
        print_win();
    } else {
        print_loss(&result.solution);
    }
    Ok(result)
}
