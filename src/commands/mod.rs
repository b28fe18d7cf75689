//! Command implementations

pub mod solve;
pub mod start;

pub use solve::{SolveOptions, run_solve};
pub use start::run_start;
