//! Elimination guesses
//!
//! When many candidates remain, guessing the leading candidate tends to
//! confirm letters already known. An elimination guess instead tests the
//! letters that are most common among the candidates at unresolved positions.

use crate::core::{Chain, Correctness, Guess, MAX_ATTEMPTS, Word};

/// Thresholds controlling when elimination guesses are used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EliminationConfig {
    /// Last attempt index (0-based) at which elimination may be used
    pub max_iteration: usize,
    /// Elimination guesses allowed per game
    pub max_tries: usize,
    /// Eliminate while more than this many candidates remain
    pub min_options: usize,
    /// Eliminate when the latest guess has at most this many absent marks
    pub min_remaining: usize,
    /// On the last eligible attempt, eliminate when fewer candidates remain than this
    pub last_chance_options: usize,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            max_iteration: 3,
            max_tries: 2,
            min_options: 25,
            min_remaining: 2,
            last_chance_options: MAX_ATTEMPTS,
        }
    }
}

impl EliminationConfig {
    /// Decide whether the next guess should be an elimination guess
    ///
    /// - `options`: candidates left after filtering with `latest`
    /// - `latest`: the guess just scored
    /// - `attempt`: 0-based index of that guess
    /// - `used`: elimination guesses already played this game
    #[must_use]
    pub fn should_eliminate(
        &self,
        options: usize,
        latest: &Guess,
        attempt: usize,
        used: usize,
    ) -> bool {
        if options <= 1 {
            return false;
        }

        let many_options = options > self.min_options;
        let few_unsolved = latest.feedback().count(Correctness::Absent) <= self.min_remaining;
        let within_iterations = attempt <= self.max_iteration;
        let within_tries = used < self.max_tries;

        let regular = (many_options || few_unsolved) && within_iterations && within_tries;
        let last_chance = options < self.last_chance_options && attempt == self.max_iteration;

        regular || last_chance
    }
}

/// Pick a word that tests the most informative unresolved letters
///
/// Takes the top-five letters from [`Chain::top_five_absent_letters`] and
/// tries ever shorter suffixes of that list, from all five down to the last
/// one. The first word of `dictionary` (commonness order) containing every
/// letter of the current suffix wins. Returns `None` if no suffix matches.
///
/// # Examples
/// ```
/// use wordle_autoplay::core::{Guess, History, Word};
/// use wordle_autoplay::solver::find_elimination_word;
///
/// let words = |list: &[&str]| -> Vec<Word> {
///     list.iter().map(|w| Word::new(*w).unwrap()).collect()
/// };
/// let dictionary = words(&["fight", "night", "light", "might"]);
/// let options: Vec<&Word> = dictionary[1..].iter().collect();
///
/// let mut history = History::new();
/// let guess = Word::new("sight").unwrap();
/// history.push(Guess::score(&guess, &Word::new("night").unwrap()));
///
/// // Only the first letter is open: n, l and m each appear once, no word
/// // has all of them, and the last suffix [n] matches night
/// let word = find_elimination_word(history.chain(), &options, &dictionary);
/// assert_eq!(word.map(Word::text), Some("night"));
/// ```
#[must_use]
pub fn find_elimination_word<'w>(
    chain: Chain<'_>,
    options: &[&Word],
    dictionary: &'w [Word],
) -> Option<&'w Word> {
    let top_five = chain.top_five_absent_letters(options);
    (0..top_five.len()).find_map(|start| {
        let wanted = &top_five[start..];
        dictionary
            .iter()
            .find(|word| wanted.iter().all(|&l| word.has_letter(l)))
    })
}
