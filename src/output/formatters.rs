//! Formatting utilities for terminal output

use crate::core::{Correctness, Guess, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

fn tile(letter: u8, mark: Correctness) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match mark {
        Correctness::Green => text.on_green().black(),
        Correctness::Yellow => text.on_yellow().black(),
        Correctness::Absent => text.normal(),
    }
}

/// Render a guess as colored letter tiles
///
/// Green and yellow letters get black text on a green or yellow background;
/// absent letters are left unstyled.
#[must_use]
pub fn colorize_guess(guess: &Guess) -> String {
    guess
        .letters()
        .map(|(letter, mark)| tile(letter, mark).to_string())
        .collect()
}

/// Render a guess as the shareable emoji grid row
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess.feedback().to_emoji()
}

/// Label for a distribution bucket, "1 Guess" or "N Guesses"
#[must_use]
pub fn bucket_label(bucket: usize) -> String {
    let attempts = bucket + 1;
    if attempts == 1 {
        "1 Guess".to_string()
    } else {
        format!("{attempts} Guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for each attempt count, scaled to the fullest bucket
#[must_use]
pub fn distribution_bars(distribution: &[usize; MAX_ATTEMPTS], width: usize) -> Vec<String> {
    let max = distribution.iter().copied().max().unwrap_or(0) as f64;
    distribution
        .iter()
        .map(|&count| create_progress_bar(count as f64, max, width))
        .collect()
}
