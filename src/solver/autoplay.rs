//! Automated play
//!
//! Drives the score / filter / pick loop for one or many simulated games and
//! keeps aggregate statistics across them. Games run strictly one after
//! another; only the statistics outlive a game.

use super::elimination::{EliminationConfig, find_elimination_word};
use super::filter::filter_options;
use crate::core::{Guess, History, MAX_ATTEMPTS, Word};
use crate::wordlists::WordBank;
use serde::Serialize;
use std::collections::BTreeMap;

/// Configuration for a solver run
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Never play elimination guesses
    pub hard: bool,
    /// Play only the first N answers
    pub iterations: Option<usize>,
    /// Play exactly one game against this word
    pub solution: Option<Word>,
    pub elimination: EliminationConfig,
}

/// Something worth reporting while the solver plays
#[derive(Debug, Clone, Copy)]
pub enum SolverEvent<'e> {
    /// A guess was scored; `attempt` is 0-based
    Scored {
        solution: &'e Word,
        attempt: usize,
        guess: &'e Guess,
    },
    /// An elimination guess replaced the leading candidate
    Eliminating { word: &'e Word, options: usize },
    Won { solution: &'e Word, attempts: usize },
    /// No candidate was left to guess
    RanOutOfGuesses { solution: &'e Word },
    Lost { solution: &'e Word },
    /// A game finished, won or lost
    GameOver { solution: &'e Word, solved: bool },
}

/// Statistics over every game played by one solver
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateStats {
    pub games: usize,
    pub wins: usize,
    /// Wins by attempt: index 0 is "solved on the first guess"
    pub distribution: [usize; MAX_ATTEMPTS],
    /// Unsolved answers mapped to the candidates left for their last guess
    pub loss_metrics: BTreeMap<String, Vec<String>>,
    pub elimination_guesses: usize,
}

impl AggregateStats {
    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

/// Result of one simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub solution: Word,
    pub history: History,
    pub solved: bool,
    pub elimination_guesses: usize,
    /// Candidates left after the last filter
    pub remaining: Vec<Word>,
}

type Trace<'a> = Box<dyn FnMut(&SolverEvent<'_>) + 'a>;

/// Plays Wordle against known solutions
///
/// Every game opens with the same starter word. After each miss the
/// dictionary is filtered through the guess history and the most common
/// surviving word not yet guessed is played, unless an elimination guess is
/// chosen instead.
pub struct AutoSolver<'a> {
    dictionary: &'a [Word],
    first_guess: Word,
    config: SolverConfig,
    stats: AggregateStats,
    trace: Option<Trace<'a>>,
}

impl<'a> AutoSolver<'a> {
    /// Create a solver over a commonness-ordered dictionary
    #[must_use]
    pub fn new(dictionary: &'a [Word], first_guess: Word, config: SolverConfig) -> Self {
        Self {
            dictionary,
            first_guess,
            config,
            stats: AggregateStats::default(),
            trace: None,
        }
    }

    /// Create a solver using a word bank's ordered dictionary and starter word
    #[must_use]
    pub fn from_bank(bank: &'a WordBank, config: SolverConfig) -> Self {
        Self::new(bank.ordered(), bank.first_guess().clone(), config)
    }

    /// Report progress to `trace`
    #[must_use]
    pub fn with_trace(mut self, trace: impl FnMut(&SolverEvent<'_>) + 'a) -> Self {
        self.trace = Some(Box::new(trace));
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    #[must_use]
    pub fn into_stats(self) -> AggregateStats {
        self.stats
    }

    /// Number of games [`run`](Self::run) will play over `answers`
    #[must_use]
    pub fn planned_games(&self, answers: &[Word]) -> usize {
        if self.config.solution.is_some() {
            1
        } else {
            self.config
                .iterations
                .map_or(answers.len(), |n| n.min(answers.len()))
        }
    }

    /// Play the configured games
    ///
    /// A pinned solution plays exactly one game. Otherwise the first
    /// `iterations` answers are played, or all of them.
    pub fn run(&mut self, answers: &[Word]) -> &AggregateStats {
        if let Some(solution) = self.config.solution.clone() {
            self.play(&solution);
        } else {
            let count = self.planned_games(answers);
            for solution in &answers[..count] {
                self.play(solution);
            }
        }
        &self.stats
    }

    /// Play one game against `solution`
    pub fn play(&mut self, solution: &Word) -> GameOutcome {
        let dictionary = self.dictionary;
        let mut history = History::new();
        let mut options: Vec<&'a Word> = Vec::new();
        let mut eliminations = 0;
        let mut solved = false;
        let mut next = Some(self.first_guess.clone());

        for attempt in 0..MAX_ATTEMPTS {
            let Some(current) = next.take() else {
                break;
            };

            let guess = Guess::score(&current, solution);
            self.emit(&SolverEvent::Scored {
                solution,
                attempt,
                guess: &guess,
            });
            let won = guess.is_solved();
            history.push(guess);

            if won {
                self.stats.wins += 1;
                self.stats.distribution[attempt] += 1;
                solved = true;
                self.emit(&SolverEvent::Won {
                    solution,
                    attempts: attempt + 1,
                });
                break;
            }

            self.stats
                .loss_metrics
                .insert(solution.text().to_string(), texts(&options));

            options = filter_options(&history, dictionary);
            next = options
                .iter()
                .find(|w| !history.contains_word(w))
                .map(|w| (*w).clone());

            if !self.config.hard
                && let Some(word) = self.elimination_word(&history, &options, attempt, eliminations)
            {
                self.emit(&SolverEvent::Eliminating {
                    word,
                    options: options.len(),
                });
                next = Some(word.clone());
                eliminations += 1;
            }

            if next.is_none() {
                self.emit(&SolverEvent::RanOutOfGuesses { solution });
                break;
            }
        }

        if solved {
            self.stats.loss_metrics.remove(solution.text());
        } else {
            self.emit(&SolverEvent::Lost { solution });
        }
        self.stats.games += 1;
        self.stats.elimination_guesses += eliminations;
        self.emit(&SolverEvent::GameOver { solution, solved });

        GameOutcome {
            solution: solution.clone(),
            history,
            solved,
            elimination_guesses: eliminations,
            remaining: options.into_iter().cloned().collect(),
        }
    }

    fn elimination_word(
        &self,
        history: &History,
        options: &[&Word],
        attempt: usize,
        used: usize,
    ) -> Option<&'a Word> {
        let latest = history.latest()?;
        if !self
            .config
            .elimination
            .should_eliminate(options.len(), latest, attempt, used)
        {
            return None;
        }
        find_elimination_word(history.chain(), options, self.dictionary)
    }

    fn emit(&mut self, event: &SolverEvent<'_>) {
        if let Some(trace) = self.trace.as_mut() {
            trace(event);
        }
    }
}

fn texts(words: &[&Word]) -> Vec<String> {
    words.iter().map(|w| w.text().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    /// Thirty words shaped `??uno` plus one word holding the letters an
    /// elimination guess should test
    fn uno_dictionary() -> Vec<Word> {
        let mut dictionary = Vec::new();
        for a in b"bcdfgj" {
            for b in b"hiklm" {
                let text: String = [*a, *b, b'u', b'n', b'o'].iter().map(|&c| c as char).collect();
                dictionary.push(word(&text));
            }
        }
        dictionary.push(word("houni"));
        dictionary
    }

    #[test]
    fn first_guess_hit_wins_immediately() {
        let dictionary = words(&["tears", "spelt"]);
        let mut solver = AutoSolver::new(&dictionary, word("tears"), SolverConfig::default());

        let outcome = solver.play(&word("tears"));
        assert!(outcome.solved);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.elimination_guesses, 0);

        let stats = solver.stats();
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.distribution, [1, 0, 0, 0, 0, 0]);
        assert!(stats.loss_metrics.is_empty());
    }

    #[test]
    fn win_on_second_attempt_clears_loss_metric() {
        let dictionary = words(&["tears", "spelt"]);
        let mut solver = AutoSolver::new(&dictionary, word("tears"), SolverConfig::default());

        let outcome = solver.play(&word("spelt"));
        assert!(outcome.solved);
        let guessed: Vec<&str> = outcome.history.guesses().iter().map(|g| g.word().text()).collect();
        assert_eq!(guessed, vec!["tears", "spelt"]);
        assert_eq!(solver.stats().distribution[1], 1);
        assert!(solver.stats().loss_metrics.is_empty());
    }

    #[test]
    fn empty_dictionary_exhausts_after_first_guess() {
        let dictionary: Vec<Word> = Vec::new();
        let mut events = Vec::new();
        let outcome = {
            let mut solver = AutoSolver::new(&dictionary, word("tears"), SolverConfig::default())
                .with_trace(|e| events.push(format!("{e:?}")));
            let outcome = solver.play(&word("bully"));

            let stats = solver.stats();
            assert_eq!(stats.games, 1);
            assert_eq!(stats.wins, 0);
            assert_eq!(stats.loss_metrics.get("bully"), Some(&Vec::new()));
            outcome
        };

        assert!(!outcome.solved);
        assert_eq!(outcome.history.len(), 1);
        assert!(outcome.remaining.is_empty());
        assert!(events.iter().any(|e| e.starts_with("RanOutOfGuesses")));
        assert!(events.iter().any(|e| e.starts_with("Lost")));
    }

    #[test]
    fn starter_word_opens_every_game() {
        let dictionary = words(&["tears", "spelt", "sheep", "those"]);
        let answers = words(&["spelt", "sheep", "those"]);
        let mut openings = Vec::new();
        {
            let mut solver = AutoSolver::new(&dictionary, word("tears"), SolverConfig::default())
                .with_trace(|event| {
                    if let SolverEvent::Scored {
                        attempt: 0, guess, ..
                    } = event
                    {
                        openings.push(guess.word().text().to_string());
                    }
                });
            let stats = solver.run(&answers);
            assert_eq!(stats.games, 3);
        }
        assert_eq!(openings, vec!["tears"; 3]);
    }

    #[test]
    fn iterations_limit_games() {
        let dictionary = words(&["tears", "spelt", "sheep"]);
        let answers = words(&["spelt", "sheep", "tears"]);
        let config = SolverConfig {
            iterations: Some(2),
            ..SolverConfig::default()
        };
        let mut solver = AutoSolver::new(&dictionary, word("tears"), config);
        assert_eq!(solver.planned_games(&answers), 2);
        assert_eq!(solver.run(&answers).games, 2);
    }

    #[test]
    fn pinned_solution_plays_one_game() {
        let dictionary = words(&["tears", "spelt", "sheep"]);
        let answers = words(&["spelt", "sheep", "tears"]);
        let config = SolverConfig {
            solution: Some(word("sheep")),
            iterations: Some(3),
            ..SolverConfig::default()
        };
        let mut solver = AutoSolver::new(&dictionary, word("tears"), config);
        let stats = solver.run(&answers);
        assert_eq!(stats.games, 1);
        assert_eq!(stats.wins, 1);
    }

    #[test]
    fn elimination_guess_replaces_leading_candidate() {
        let dictionary = uno_dictionary();
        let mut solver = AutoSolver::new(&dictionary, word("tears"), SolverConfig::default());

        let outcome = solver.play(&word("jmuno"));
        let guessed: Vec<&str> = outcome.history.guesses().iter().map(|g| g.word().text()).collect();

        // TEARS leaves all 31 words; the top letters i, h, o, n, u only
        // appear together in HOUNI
        assert_eq!(guessed[1], "houni");
        assert!(outcome.elimination_guesses >= 1);
        assert_eq!(solver.stats().elimination_guesses, outcome.elimination_guesses);
    }

    #[test]
    fn hard_mode_never_eliminates() {
        let dictionary = uno_dictionary();
        let config = SolverConfig {
            hard: true,
            ..SolverConfig::default()
        };
        let mut solver = AutoSolver::new(&dictionary, word("tears"), config);

        let outcome = solver.play(&word("jmuno"));
        let guessed: Vec<&str> = outcome.history.guesses().iter().map(|g| g.word().text()).collect();

        assert_eq!(guessed[1], "bhuno");
        assert!(!guessed.contains(&"houni"));
        assert_eq!(outcome.elimination_guesses, 0);
        assert_eq!(solver.stats().elimination_guesses, 0);
    }

    #[test]
    fn exhausted_game_keeps_last_snapshot() {
        // Hard mode walks the ??uno list one word at a time and cannot reach
        // jmuno within six guesses
        let dictionary = uno_dictionary();
        let config = SolverConfig {
            hard: true,
            ..SolverConfig::default()
        };
        let mut solver = AutoSolver::new(&dictionary, word("tears"), config);

        let outcome = solver.play(&word("jmuno"));
        assert!(!outcome.solved);
        assert_eq!(outcome.history.len(), MAX_ATTEMPTS);

        let snapshot = solver.stats().loss_metrics.get("jmuno").unwrap();
        assert!(snapshot.contains(&"jmuno".to_string()));
        assert!((solver.stats().win_percentage() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn win_percentage_handles_no_games() {
        assert!((AggregateStats::default().win_percentage() - 0.0).abs() < f64::EPSILON);
    }
}
