//! Display functions for game and solver results

use super::formatters::{bucket_label, colorize_guess, distribution_bars};
use crate::core::{Guess, Word};
use crate::solver::{AggregateStats, SolverEvent};
use colored::Colorize;

/// Print one scored guess
pub fn print_guess(guess: &Guess) {
    println!("{}", colorize_guess(guess));
}

pub fn print_win() {
    println!("{}", "You win!".green().bold());
}

pub fn print_loss(solution: &Word) {
    println!("{}", format!("You lose, answer was {solution}").red().bold());
}

/// Print a solver event the way the debug trace shows it
pub fn print_solver_event(event: &SolverEvent<'_>) {
    match event {
        SolverEvent::Scored { guess, .. } => print_guess(guess),
        SolverEvent::Won { .. } => print_win(),
        SolverEvent::RanOutOfGuesses { solution } => {
            println!(
                "{}",
                format!("Ran out of guesses, answer was {solution}").yellow()
            );
        }
        SolverEvent::Lost { solution } => print_loss(solution),
        SolverEvent::Eliminating { .. } | SolverEvent::GameOver { .. } => {}
    }
}

/// Summary line, e.g. "Won 9/10 times (90.00%)"
#[must_use]
pub fn summary_line(stats: &AggregateStats) -> String {
    format!(
        "Won {}/{} times ({:.2}%)",
        stats.wins,
        stats.games,
        stats.win_percentage()
    )
}

/// Print the win summary and score distribution
pub fn print_stats(stats: &AggregateStats) {
    println!("\n{}", summary_line(stats).bright_cyan().bold());
    println!("{}", "Score Distribution:".bright_cyan());

    let bars = distribution_bars(&stats.distribution, 30);
    for (bucket, (count, bar)) in stats.distribution.iter().zip(&bars).enumerate() {
        println!("    {:<10} {} {count}", bucket_label(bucket), bar.green());
    }

    if stats.elimination_guesses > 0 {
        println!("    Elimination guesses: {}", stats.elimination_guesses);
    }
}

/// Print unsolved answers and their last candidates as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_loss_metrics(stats: &AggregateStats) -> serde_json::Result<()> {
    if stats.loss_metrics.is_empty() {
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&stats.loss_metrics)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_two_decimals() {
        let stats = AggregateStats {
            games: 3,
            wins: 2,
            ..AggregateStats::default()
        };
        assert_eq!(summary_line(&stats), "Won 2/3 times (66.67%)");
    }

    #[test]
    fn summary_with_no_games() {
        assert_eq!(
            summary_line(&AggregateStats::default()),
            "Won 0/0 times (0.00%)"
        );
    }

    #[test]
    fn loss_metrics_serialize_as_object() {
        let mut stats = AggregateStats::default();
        stats
            .loss_metrics
            .insert("jmuno".to_string(), vec!["gmuno".to_string(), "jmuno".to_string()]);
        let json = serde_json::to_value(&stats.loss_metrics).unwrap();
        assert_eq!(json["jmuno"][1], "jmuno");
    }
}
