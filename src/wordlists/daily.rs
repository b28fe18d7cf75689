//! Today's answer
//!
//! Answers are indexed by the number of whole days since the game's launch
//! on 2021-06-19, counted in UTC.

use crate::core::Word;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// 2021-06-19 as days since the Unix epoch
pub const LAUNCH_DAY: u64 = 18_797;

/// Whole days between launch and `now`, 0 before launch
#[must_use]
pub fn days_since_launch(now: SystemTime) -> u64 {
    now.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() / SECONDS_PER_DAY)
        .saturating_sub(LAUNCH_DAY)
}

/// The answer for `day`, wrapping around the list
///
/// Returns `None` if there are no answers.
#[must_use]
pub fn daily_solution(answers: &[Word], day: u64) -> Option<&Word> {
    if answers.is_empty() {
        return None;
    }
    answers.get((day % answers.len() as u64) as usize)
}

/// The answer for the current day
#[must_use]
pub fn todays_solution(answers: &[Word]) -> Option<&Word> {
    daily_solution(answers, days_since_launch(SystemTime::now()))
}
