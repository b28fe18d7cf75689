//! Guess scoring
//!
//! A `Guess` is created once per attempt, scored against the solution on
//! construction, and never mutated afterwards.

use super::{Correctness, Feedback, WORD_LENGTH, Word};
use std::fmt;

/// A guessed word together with its correctness marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    /// Score `guess` against `solution`
    ///
    /// Implements Wordle's duplicate-letter rules with a pool of the
    /// solution's letters:
    /// 1. First pass: mark greens and remove them from the pool
    /// 2. Second pass: mark yellows for letters still in the pool, consuming one
    ///    occurrence each time so a letter is never credited more often than
    ///    it appears in the solution
    /// 3. Everything else stays absent
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Feedback, Guess, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let solution = Word::new("spelt").unwrap();
    /// let scored = Guess::score(&guess, &solution);
    ///
    /// // S(green) H(absent) E(green) E(absent) P(yellow)
    /// assert_eq!(scored.feedback(), Feedback::parse("G-G-Y").unwrap());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let mut feedback = Feedback::default();
        let mut remaining = solution.char_counts();

        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                feedback.set(i, Correctness::Green);
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback.mark(i) == Correctness::Green {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
                && letter != solution.char_at(i)
            {
                feedback.set(i, Correctness::Yellow);
                *count -= 1;
            }
        }

        Self {
            word: guess.clone(),
            feedback,
        }
    }

    /// Build a guess from externally supplied feedback
    #[must_use]
    pub const fn with_feedback(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub fn mark(&self, position: usize) -> Correctness {
        self.feedback.mark(position)
    }

    /// Letters of this guess paired with their marks, in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, Correctness)> + '_ {
        self.word
            .chars()
            .iter()
            .copied()
            .zip(self.feedback.marks().iter().copied())
    }

    /// True when every letter is green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_perfect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.feedback)
    }
}
