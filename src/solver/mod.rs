//! Autoplay solver
//!
//! Candidate filtering, elimination guesses and the loop that plays
//! simulated games with them.

pub mod autoplay;
pub mod elimination;
mod filter;

pub use autoplay::{AggregateStats, AutoSolver, GameOutcome, SolverConfig, SolverEvent};
pub use elimination::{EliminationConfig, find_elimination_word};
pub use filter::filter_options;
