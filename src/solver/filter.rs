//! Constraint filtering
//!
//! Narrows a candidate dictionary to the words consistent with every scored
//! guess so far. Constraints compound from the oldest guess to the newest and
//! the input order (commonness) is always preserved.

use crate::core::{Chain, Correctness, Guess, History, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Filter `options` through the whole guess history
///
/// Each guess is applied in turn to the survivors of the guesses before it,
/// removing duplicates before every step. An empty history only de-duplicates.
///
/// # Examples
/// ```
/// use wordle_autoplay::core::{Guess, History, Word};
/// use wordle_autoplay::solver::filter_options;
///
/// let dictionary: Vec<Word> = ["tests", "tents", "texts", "rests"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut history = History::new();
/// let tests = Word::new("tests").unwrap();
/// history.push(Guess::score(&tests, &tests));
///
/// let survivors = filter_options(&history, &dictionary);
/// assert_eq!(survivors, vec![&dictionary[0]]);
/// ```
pub fn filter_options<'w, I>(history: &History, options: I) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    let mut current = dedup(options);
    for chain in history.prefixes() {
        current = filter_step(chain, &current);
        current = dedup(current);
    }
    current
}

/// Apply the newest guess of `chain` to `options`
///
/// Green and yellow stages use the newest guess only; the absent stage uses
/// letters accumulated over the whole chain.
fn filter_step<'w>(chain: Chain<'_>, options: &[&'w Word]) -> Vec<&'w Word> {
    let Some(guess) = chain.latest() else {
        return options.to_vec();
    };

    let blocked = blocked_letters(chain);
    let correct = chain.correct_letters();

    options
        .iter()
        .copied()
        .filter(|w| matches_greens(guess, w))
        .filter(|w| matches_yellows(guess, w))
        .filter(|w| avoids_absent(&blocked, &correct, w))
        .collect()
}

fn dedup<'w>(options: impl IntoIterator<Item = &'w Word>) -> Vec<&'w Word> {
    let mut seen = FxHashSet::default();
    options.into_iter().filter(|w| seen.insert(*w)).collect()
}

/// Every green position must hold the guessed letter
fn matches_greens(guess: &Guess, word: &Word) -> bool {
    guess
        .letters()
        .enumerate()
        .all(|(i, (letter, mark))| mark != Correctness::Green || word.char_at(i) == letter)
}

/// Every yellow letter must appear at some non-green position other than its own
fn matches_yellows(guess: &Guess, word: &Word) -> bool {
    guess.letters().enumerate().all(|(i, (letter, mark))| {
        if mark != Correctness::Yellow {
            return true;
        }
        if word.char_at(i) == letter {
            return false;
        }
        (0..WORD_LENGTH)
            .any(|j| guess.mark(j) != Correctness::Green && word.char_at(j) == letter)
    })
}

/// Letters that may not appear at any unresolved position
///
/// A letter marked absent on one occurrence but yellow on another is still in
/// the solution, so only letters never seen yellow are blocked.
fn blocked_letters(chain: Chain<'_>) -> Vec<u8> {
    let yellow = chain.yellow_letters();
    chain
        .absent_letters()
        .into_iter()
        .filter(|l| !yellow.contains(l))
        .collect()
}

fn avoids_absent(blocked: &[u8], correct: &[Option<u8>; WORD_LENGTH], word: &Word) -> bool {
    correct
        .iter()
        .enumerate()
        .all(|(i, c)| c.is_some() || !blocked.contains(&word.char_at(i)))
}
