//! Per-letter correctness marks for a scored guess
//!
//! Each position of a guess receives one mark:
//! - Green: letter matches the solution at that position
//! - Yellow: letter is in the solution at another position
//! - Absent: this occurrence of the letter is not usable anywhere else

use super::WORD_LENGTH;
use serde::Serialize;
use std::fmt;

/// Correctness of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Correctness {
    Green,
    Yellow,
    #[default]
    Absent,
}

impl Correctness {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The five correctness marks of one guess, index-aligned with the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Feedback([Correctness; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Correctness::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Correctness; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Correctness; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Correctness {
        self.0[position]
    }

    #[inline]
    pub(crate) fn set(&mut self, position: usize, mark: Correctness) {
        self.0[position] = mark;
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Correctness) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Correctness, Feedback};
    ///
    /// let feedback = Feedback::parse("G-G-Y").unwrap();
    /// assert_eq!(feedback.mark(4), Correctness::Yellow);
    /// assert_eq!(feedback, Feedback::parse("🟩⬜🟩⬜🟨").unwrap());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut feedback = Self::default();
        for (i, ch) in chars.into_iter().enumerate() {
            let mark = match ch {
                'G' | 'g' | '🟩' => Correctness::Green,
                'Y' | 'y' | '🟨' => Correctness::Yellow,
                '-' | '_' | '⬜' => Correctness::Absent,
                _ => return None,
            };
            feedback.set(i, mark);
        }
        Some(feedback)
    }

    /// Convert feedback to an emoji string such as "🟩⬜🟩⬜🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().copied().map(Correctness::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                Correctness::Green => 'G',
                Correctness::Yellow => 'Y',
                Correctness::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count(Correctness::Green), 5);
        assert_eq!(Feedback::PERFECT.count(Correctness::Absent), 0);
    }

    #[test]
    fn feedback_defaults_to_absent() {
        let feedback = Feedback::default();
        assert_eq!(feedback.count(Correctness::Absent), 5);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn feedback_parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count(Correctness::Green), 2);
        assert_eq!(p1.count(Correctness::Yellow), 1);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none()); // Too long (6 chars)
        assert!(Feedback::parse("GYG").is_none()); // Too short
        assert!(Feedback::parse("GXGGY").is_none()); // Invalid char
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn feedback_display_and_emoji() {
        let feedback = Feedback::parse("G-G-Y").unwrap();
        assert_eq!(feedback.to_string(), "G-G-Y");
        assert_eq!(feedback.to_emoji(), "🟩⬜🟩⬜🟨");
    }

    #[test]
    fn correctness_serializes_lowercase() {
        let json = serde_json::to_string(&Correctness::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
    }
}
