//! Terminal output formatting
//!
//! Display utilities for games, solver traces and statistics.

pub mod display;
pub mod formatters;

pub use display::{
    print_guess, print_loss, print_loss_metrics, print_solver_event, print_stats, print_win,
    summary_line,
};
pub use formatters::{colorize_guess, guess_to_emoji};
