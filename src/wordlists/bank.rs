//! Loaded word lists and the solver's ordered dictionary

use super::parser::{parse_wordlist, words_from_strs};
use super::source::{DictionarySource, ListKind};
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Good opening guesses
pub const STARTER_WORDS: [&str; 20] = [
    "react", "adieu", "later", "sired", "tears", "alone", "arise", "about", "atone", "irate",
    "snare", "cream", "paint", "worse", "sauce", "anime", "prowl", "roast", "drape", "media",
];

/// Index into [`STARTER_WORDS`] of the solver's opening guess
pub const FIRST_GUESS_INDEX: usize = 4;

/// (more common, less common) pairs the common list ranks the wrong way round
const MORE_COMMON: [(&str, &str); 15] = [
    ("bloke", "looke"),
    ("boozy", "booby"),
    ("condo", "codon"),
    ("corer", "codon"),
    ("elide", "edile"),
    ("embed", "ebbed"),
    ("fjord", "moord"),
    ("gooey", "bogey"),
    ("homer", "zomer"),
    ("modal", "dolma"),
    ("modem", "eodem"),
    ("oaken", "waken"),
    ("roach", "orach"),
    ("wacky", "cacky"),
    ("wooly", "mooly"),
];

/// Every list the game and solver need, loaded once
///
/// # Examples
/// ```
/// use wordle_autoplay::wordlists::{EmbeddedSource, WordBank};
///
/// let bank = WordBank::load(&EmbeddedSource);
/// assert_eq!(bank.first_guess().text(), "tears");
/// assert!(bank.is_acceptable("tears"));
/// ```
#[derive(Debug, Clone)]
pub struct WordBank {
    wordlist: Vec<Word>,
    acceptable: FxHashSet<String>,
    common: Vec<Word>,
    answers: Vec<Word>,
    ordered: Vec<Word>,
    starters: Vec<Word>,
}

impl WordBank {
    /// Fetch and parse all lists from `source`
    #[must_use]
    pub fn load(source: &dyn DictionarySource) -> Self {
        let parsed = |kind: ListKind| parse_wordlist(&source.fetch(kind), kind.sorted());
        Self::from_lists(
            parsed(ListKind::Wordlist).as_slice(),
            parsed(ListKind::Common).as_slice(),
            parsed(ListKind::RealWordles).as_slice(),
        )
    }

    /// Build a bank from already parsed lists
    ///
    /// Entries that are not valid five-letter words are skipped.
    #[must_use]
    pub fn from_lists<S: AsRef<str>>(wordlist: &[S], common: &[S], answers: &[S]) -> Self {
        let wordlist = words_from_strs(wordlist);
        let common = words_from_strs(common);
        let answers = words_from_strs(answers);
        let acceptable = wordlist.iter().map(|w| w.text().to_string()).collect();
        let ordered = order_by_commonness(&wordlist, &common);

        Self {
            wordlist,
            acceptable,
            common,
            answers,
            ordered,
            starters: words_from_strs(&STARTER_WORDS),
        }
    }

    /// Acceptable guesses, sorted
    #[must_use]
    pub fn wordlist(&self) -> &[Word] {
        &self.wordlist
    }

    /// Common words in commonness order, including some that are not guessable
    #[must_use]
    pub fn common(&self) -> &[Word] {
        &self.common
    }

    /// Known Wordle answers
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Every acceptable guess, most common first
    #[must_use]
    pub fn ordered(&self) -> &[Word] {
        &self.ordered
    }

    #[must_use]
    pub fn starter_words(&self) -> &[Word] {
        &self.starters
    }

    /// The solver's opening guess
    #[must_use]
    pub fn first_guess(&self) -> &Word {
        &self.starters[FIRST_GUESS_INDEX]
    }

    /// Whether `text` is an acceptable guess
    #[must_use]
    pub fn is_acceptable(&self, text: &str) -> bool {
        self.acceptable.contains(text)
    }
}

/// Common words that are acceptable, then the rest of the wordlist
fn order_by_commonness(wordlist: &[Word], common: &[Word]) -> Vec<Word> {
    let acceptable: FxHashSet<&Word> = wordlist.iter().collect();
    let mut seen = FxHashSet::default();
    let mut ordered: Vec<Word> = common
        .iter()
        .chain(wordlist)
        .filter(|w| acceptable.contains(w) && seen.insert(*w))
        .cloned()
        .collect();

    for (more, less) in MORE_COMMON {
        promote(&mut ordered, more, less);
    }
    ordered
}

/// Move `more` to sit directly before `less` when both are present
fn promote(words: &mut Vec<Word>, more: &str, less: &str) {
    fn position(words: &[Word], text: &str) -> Option<usize> {
        words.iter().position(|w| w.text() == text)
    }

    let Some(from) = position(words, more) else {
        return;
    };
    if position(words, less).is_none() {
        return;
    }
    let word = words.remove(from);
    if let Some(to) = position(words, less) {
        words.insert(to, word);
    }
}
