//! Where word lists come from
//!
//! A source hands back the raw text of a list. Failures are reported as a
//! warning and an empty string, so a missing list becomes an empty list
//! instead of aborting the program.

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// The three lists a word bank is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Every acceptable guess
    Wordlist,
    /// Common words, most common first
    Common,
    /// Past and future answers
    RealWordles,
}

impl ListKind {
    pub const ALL: [Self; 3] = [Self::Wordlist, Self::Common, Self::RealWordles];

    /// File name used by on-disk and embedded lists
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Wordlist => "wordlist.txt",
            Self::Common => "common_words.txt",
            Self::RealWordles => "real_wordles.txt",
        }
    }

    /// Whether the list is sorted when parsed
    ///
    /// The common list carries its order, so it is left alone.
    #[must_use]
    pub const fn sorted(self) -> bool {
        !matches!(self, Self::Common)
    }
}

/// Supplies the raw text of word lists
pub trait DictionarySource {
    /// Raw list text, or an empty string if it could not be fetched
    fn fetch(&self, kind: ListKind) -> String;
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

const WORDLIST: &str = include_str!("../../data/wordlist.txt");
const COMMON_WORDS: &str = include_str!("../../data/common_words.txt");
const REAL_WORDLES: &str = include_str!("../../data/real_wordles.txt");

impl DictionarySource for EmbeddedSource {
    fn fetch(&self, kind: ListKind) -> String {
        match kind {
            ListKind::Wordlist => WORDLIST,
            ListKind::Common => COMMON_WORDS,
            ListKind::RealWordles => REAL_WORDLES,
        }
        .to_string()
    }
}

/// Lists read from a directory holding the three list files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DictionarySource for DirectorySource {
    fn fetch(&self, kind: ListKind) -> String {
        let path = self.root.join(kind.file_name());
        fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!(
                "{} could not read {}: {e}",
                "warning:".yellow().bold(),
                path.display()
            );
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lists_have_header_and_words() {
        for kind in ListKind::ALL {
            let text = EmbeddedSource.fetch(kind);
            let mut lines = text.lines();
            assert!(lines.next().is_some_and(|l| l.starts_with('#')));
            assert!(lines.any(|l| l.len() == 5), "{} has no words", kind.file_name());
        }
    }

    #[test]
    fn only_common_list_keeps_its_order() {
        assert!(ListKind::Wordlist.sorted());
        assert!(ListKind::RealWordles.sorted());
        assert!(!ListKind::Common.sorted());
    }

    #[test]
    fn missing_directory_yields_empty_text() {
        let source = DirectorySource::new("/nonexistent/wordle_autoplay/lists");
        for kind in ListKind::ALL {
            assert!(source.fetch(kind).is_empty());
        }
    }

    #[test]
    fn directory_source_reads_files() {
        let root = std::env::temp_dir().join(format!("wordle_autoplay_src_{}", std::process::id()));
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("wordlist.txt"), "# header\ntears\n").unwrap();

        let source = DirectorySource::new(&root);
        assert_eq!(source.fetch(ListKind::Wordlist), "# header\ntears\n");
        assert!(source.fetch(ListKind::Common).is_empty());

        fs::remove_dir_all(&root).unwrap();
    }
}
