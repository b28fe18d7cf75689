//! Reading guesses from the player

use super::validator::check_guess;
use crate::core::Word;
use crate::wordlists::WordBank;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of player guesses
pub trait Prompter {
    /// Ask for the next valid guess
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing the prompt fails.
    fn prompt_guess(&mut self, attempts_remaining: usize) -> io::Result<Option<Word>>;
}

/// Prompts on a writer and reads answers line by line, asking again until a
/// guess passes validation
pub struct LinePrompter<'b, R, W> {
    bank: &'b WordBank,
    input: R,
    output: W,
}

impl<'b> LinePrompter<'b, StdinLock<'static>, Stdout> {
    /// Prompt on the terminal
    #[must_use]
    pub fn stdin(bank: &'b WordBank) -> Self {
        Self::new(bank, io::stdin().lock(), io::stdout())
    }
}

impl<'b, R: BufRead, W: Write> LinePrompter<'b, R, W> {
    #[must_use]
    pub const fn new(bank: &'b WordBank, input: R, output: W) -> Self {
        Self {
            bank,
            input,
            output,
        }
    }

    /// Give back the writer, e.g. to inspect what was prompted
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<'_, R, W> {
    fn prompt_guess(&mut self, attempts_remaining: usize) -> io::Result<Option<Word>> {
        loop {
            write!(
                self.output,
                "Guess a 5-letter word ({attempts_remaining} attempts remaining): "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match check_guess(line.trim(), self.bank) {
                Ok(word) => return Ok(Some(word)),
                Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> WordBank {
        WordBank::from_lists(&["tears", "spelt"], &[], &[])
    }

    #[test]
    fn reprompts_until_valid() {
        let bank = bank();
        let input = "t3ars\ntear\nzzzzz\nSPELT\n".as_bytes();
        let mut prompter = LinePrompter::new(&bank, input, Vec::new());

        let guess = prompter.prompt_guess(6).unwrap();
        assert_eq!(guess.map(|w| w.text().to_string()), Some("spelt".to_string()));

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("(6 attempts remaining)").count(), 4);
        assert!(output.contains("Input must be letters A-Z"));
        assert!(output.contains("Input must be exactly 5 letters"));
        assert!(output.contains("Not a valid word"));
    }

    #[test]
    fn end_of_input_yields_none() {
        let bank = bank();
        let mut prompter = LinePrompter::new(&bank, "zzzzz\n".as_bytes(), io::sink());
        assert!(prompter.prompt_guess(3).unwrap().is_none());
    }
}
