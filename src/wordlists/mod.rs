//! Word lists
//!
//! Raw lists come from a [`DictionarySource`], are parsed once and held in a
//! [`WordBank`] that the game and solver borrow from.

mod bank;
pub mod daily;
mod parser;
mod source;

pub use bank::{FIRST_GUESS_INDEX, STARTER_WORDS, WordBank};
pub use daily::{daily_solution, todays_solution};
pub use parser::{parse_wordlist, words_from_strs};
pub use source::{DictionarySource, DirectorySource, EmbeddedSource, ListKind};
