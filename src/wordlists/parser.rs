//! Word list parsing

use crate::core::Word;

/// Split raw list text into words
///
/// The first line is a comment and is always dropped. Blank lines are
/// skipped. When `sort` is set the lines are sorted before blanks are
/// removed.
///
/// # Examples
/// ```
/// use wordle_autoplay::wordlists::parse_wordlist;
///
/// let text = "# comment\nhello\nworld\n\ntests";
/// assert_eq!(parse_wordlist(text, true), vec!["hello", "tests", "world"]);
/// assert_eq!(parse_wordlist(text, false), vec!["hello", "world", "tests"]);
/// ```
#[must_use]
pub fn parse_wordlist(text: &str, sort: bool) -> Vec<String> {
    let mut lines: Vec<&str> = text.split('\n').skip(1).map(str::trim_end).collect();
    if sort {
        lines.sort_unstable();
    }
    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert strings to words, skipping any that are not valid words
#[must_use]
pub fn words_from_strs<S: AsRef<str>>(list: &[S]) -> Vec<Word> {
    list.iter().filter_map(|s| Word::new(s.as_ref()).ok()).collect()
}
