//! The ordered chain of scored guesses in one game
//!
//! Guesses are kept oldest first. Everything the solver knows about the
//! solution is derived by folding over this sequence.

use super::{Correctness, Guess, WORD_LENGTH, Word};

/// Letters in first-seen order without repeats
fn push_unique(letters: &mut Vec<u8>, letter: u8) {
    if !letters.contains(&letter) {
        letters.push(letter);
    }
}

/// Owned guess history for one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    guesses: Vec<Guess>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            guesses: Vec::new(),
        }
    }

    /// Append the newest guess
    pub fn push(&mut self, guess: Guess) {
        self.guesses.push(guess);
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The most recent guess, if any
    #[must_use]
    pub fn latest(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Whether `word` has already been guessed in this game
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.guesses.iter().any(|g| g.word() == word)
    }

    /// Borrow the whole history as a chain for derived queries
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(&self.guesses)
    }

    /// Every leading sub-chain, shortest first
    ///
    /// The n-th item sees only the first n guesses, which is how constraints
    /// compound from the oldest guess to the newest.
    pub fn prefixes(&self) -> impl Iterator<Item = Chain<'_>> {
        (1..=self.guesses.len()).map(|n| Chain::new(&self.guesses[..n]))
    }
}

impl From<Vec<Guess>> for History {
    fn from(guesses: Vec<Guess>) -> Self {
        Self { guesses }
    }
}

/// A borrowed, oldest-first view of scored guesses
///
/// The last guess in the view plays the role of "this guess", everything
/// before it is the prior chain.
#[derive(Debug, Clone, Copy)]
pub struct Chain<'h> {
    guesses: &'h [Guess],
}

impl<'h> Chain<'h> {
    #[must_use]
    pub const fn new(guesses: &'h [Guess]) -> Self {
        Self { guesses }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&'h Guess> {
        self.guesses.last()
    }

    /// Letters marked absent anywhere in the chain
    #[must_use]
    pub fn absent_letters(&self) -> Vec<u8> {
        self.letters_marked(Correctness::Absent)
    }

    /// Letters marked yellow anywhere in the chain
    #[must_use]
    pub fn yellow_letters(&self) -> Vec<u8> {
        self.letters_marked(Correctness::Yellow)
    }

    /// Latest known green letter per position
    ///
    /// Later greens override earlier unknowns; nothing is ever reset to unknown.
    #[must_use]
    pub fn correct_letters(&self) -> [Option<u8>; WORD_LENGTH] {
        self.guesses.iter().fold([None; WORD_LENGTH], |mut acc, guess| {
            for (i, (letter, mark)) in guess.letters().enumerate() {
                if mark == Correctness::Green {
                    acc[i] = Some(letter);
                }
            }
            acc
        })
    }

    /// Letters known to be in the solution (yellow or green)
    #[must_use]
    pub fn known_letters(&self) -> Vec<u8> {
        let mut known = self.yellow_letters();
        for letter in self.correct_letters().into_iter().flatten() {
            push_unique(&mut known, letter);
        }
        known
    }

    /// The alphabet minus absent letters and known-correct letters
    #[must_use]
    pub fn remaining_letters(&self) -> Vec<u8> {
        let absent = self.absent_letters();
        let correct = self.correct_letters();
        (b'a'..=b'z')
            .filter(|l| !absent.contains(l) && !correct.contains(&Some(*l)))
            .collect()
    }

    /// Positions whose correct letter is still unknown
    #[must_use]
    pub fn absent_indexes(&self) -> Vec<usize> {
        self.correct_letters()
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.is_none().then_some(i))
            .collect()
    }

    /// The five most frequent letters at the unknown positions of `options`
    ///
    /// Yellow letters are skipped since they are already known to be present.
    /// Letters are ranked by descending frequency with ties kept in first-seen
    /// order; the top five are then returned least frequent first.
    #[must_use]
    pub fn top_five_absent_letters(&self, options: &[&Word]) -> Vec<u8> {
        let yellow = self.yellow_letters();
        let missing = self.absent_indexes();

        let mut counts: Vec<(u8, usize)> = Vec::new();
        for option in options {
            for &j in &missing {
                let letter = option.char_at(j);
                match counts.iter_mut().find(|(l, _)| *l == letter) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((letter, 1)),
                }
            }
        }
        counts.retain(|(l, _)| !yellow.contains(l));

        // sort_by is stable, so equal counts keep first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(5);
        counts.into_iter().rev().map(|(l, _)| l).collect()
    }

    fn letters_marked(&self, wanted: Correctness) -> Vec<u8> {
        let mut letters = Vec::new();
        for guess in self.guesses {
            for (letter, mark) in guess.letters() {
                if mark == wanted {
                    push_unique(&mut letters, letter);
                }
            }
        }
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn history(guesses: &[&str], solution: &str) -> History {
        let solution = word(solution);
        let mut history = History::new();
        for g in guesses {
            history.push(Guess::score(&word(g), &solution));
        }
        history
    }

    #[test]
    fn empty_history_knows_nothing() {
        let h = History::new();
        let chain = h.chain();
        assert!(chain.absent_letters().is_empty());
        assert_eq!(chain.correct_letters(), [None; 5]);
        assert_eq!(chain.absent_indexes(), vec![0, 1, 2, 3, 4]);
        assert_eq!(chain.remaining_letters().len(), 26);
        assert!(chain.latest().is_none());
    }

    #[test]
    fn single_guess_derived_letters() {
        // SHEEP vs SPELT: G-G-Y
        let h = history(&["sheep"], "spelt");
        let chain = h.chain();

        assert_eq!(chain.absent_letters(), b"he".to_vec());
        assert_eq!(chain.yellow_letters(), b"p".to_vec());
        assert_eq!(
            chain.correct_letters(),
            [Some(b's'), None, Some(b'e'), None, None]
        );
        assert_eq!(chain.known_letters(), b"pse".to_vec());
        assert_eq!(chain.absent_indexes(), vec![1, 3, 4]);

        let remaining = chain.remaining_letters();
        assert_eq!(remaining.len(), 26 - 3);
        assert!(!remaining.contains(&b'h'));
        assert!(!remaining.contains(&b's'));
        assert!(remaining.contains(&b'p'));
    }

    #[test]
    fn correct_letters_fold_across_chain() {
        // TEARS vs SPELT: only T/E/S shared, nothing in place
        // SHEEP vs SPELT: S and E green
        // SPELT vs SPELT: all green
        let h = history(&["tears", "sheep", "spelt"], "spelt");
        assert_eq!(
            h.chain().correct_letters(),
            [Some(b's'), Some(b'p'), Some(b'e'), Some(b'l'), Some(b't')]
        );

        let by_prefix: Vec<_> = h.prefixes().map(|c| c.correct_letters()).collect();
        assert_eq!(by_prefix.len(), 3);
        assert_eq!(by_prefix[0], [None; 5]);
        assert_eq!(by_prefix[1], [Some(b's'), None, Some(b'e'), None, None]);
    }

    #[test]
    fn greens_are_never_cleared_by_later_guesses() {
        let h = history(&["sheep", "tears"], "spelt");
        assert_eq!(
            h.chain().correct_letters(),
            [Some(b's'), None, Some(b'e'), None, None]
        );
    }

    #[test]
    fn top_five_absent_letters_ranks_by_frequency() {
        // After SHEEP vs SPELT positions 1, 3 and 4 are unknown and P is yellow
        let h = history(&["sheep"], "spelt");
        let options: Vec<Word> = ["spelt", "swell", "spend", "smelt"]
            .into_iter()
            .map(word)
            .collect();
        let refs: Vec<&Word> = options.iter().collect();

        // Counts at positions 1/3/4 (P skipped):
        // l:4 t:2 w:1 n:1 d:1 m:1 -> top five l,t,w,n,d -> reversed
        assert_eq!(
            h.chain().top_five_absent_letters(&refs),
            b"dnwtl".to_vec()
        );
    }

    #[test]
    fn top_five_absent_letters_handles_few_letters() {
        let h = history(&["tears"], "tests");
        let options = [word("tests")];
        let refs: Vec<&Word> = options.iter().collect();
        // TEARS vs TESTS: T E green, S green at 4, A/R absent -> unknown 2 and 3
        assert_eq!(h.chain().top_five_absent_letters(&refs), b"ts".to_vec());
    }

    #[test]
    fn contains_word_checks_guessed_words() {
        let h = history(&["tears", "sheep"], "spelt");
        assert!(h.contains_word(&word("sheep")));
        assert!(!h.contains_word(&word("spelt")));
        assert_eq!(h.latest().map(|g| g.word().text()), Some("sheep"));
    }
}
