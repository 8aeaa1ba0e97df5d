use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::scramble::{can_scramble, scramble};
use crate::{dictionary::WordPool, error::ConfigError};

/// Rounds per game in the original unscramble app
pub const DEFAULT_MAX_ROUNDS: usize = 10;
/// Points awarded per correct guess
pub const DEFAULT_SCORE_INCREMENT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub max_rounds: usize,
    pub score_increment: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increment: DEFAULT_SCORE_INCREMENT,
        }
    }
}

impl GameSettings {
    /// Check that these settings together with `pool` describe a game that can
    /// always deal `max_rounds` distinct, scrambled words.
    pub fn validate(&self, pool: &WordPool) -> Result<(), ConfigError> {
        if pool.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.max_rounds > pool.len() {
            return Err(ConfigError::RoundsExceedPool {
                max_rounds: self.max_rounds,
                pool_size: pool.len(),
            });
        }
        if let Some(word) = pool.words().iter().find(|word| !can_scramble(word)) {
            return Err(ConfigError::Unscramblable { word: word.clone() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Advanced,
    /// Round limit reached. Terminal until [`WordGame::restart`].
    GameOver,
}

/// What a player is allowed to see of a running game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub scrambled_word: String,
    pub score: u32,
    pub round: usize,
    pub max_rounds: usize,
}

/// Word-scramble game state: word selection without repeats, scrambling,
/// scoring and round counting.
///
/// Invariants held between calls:
/// - `current_scrambled` is a permutation of `current_word` and never equal
///   to it (case-sensitive)
/// - `round_count == used_words.len()` and `round_count <= max_rounds`
#[derive(Debug)]
pub struct WordGame<R = StdRng> {
    pool: WordPool,
    settings: GameSettings,
    rng: R,
    used_words: HashSet<String>,
    current_word: String,
    current_scrambled: String,
    score: u32,
    round_count: usize,
}

impl WordGame<StdRng> {
    /// Start a game seeded from the operating system
    pub fn start(pool: WordPool, settings: GameSettings) -> Result<Self, ConfigError> {
        Self::with_rng(pool, settings, StdRng::from_os_rng())
    }
}

impl<R: Rng> WordGame<R> {
    /// Start a game driven by the given random source. The game is already on
    /// round 1 when this returns.
    pub fn with_rng(pool: WordPool, settings: GameSettings, rng: R) -> Result<Self, ConfigError> {
        settings.validate(&pool)?;

        let mut game = Self {
            pool,
            settings,
            rng,
            used_words: HashSet::with_capacity(settings.max_rounds),
            current_word: String::new(),
            current_scrambled: String::new(),
            score: 0,
            round_count: 0,
        };
        game.advance();

        Ok(game)
    }

    pub fn current_scrambled_word(&self) -> &str {
        &self.current_scrambled
    }

    /// Compare `candidate` with the current word ignoring case. Does not move
    /// to the next round. The score saturates at `u32::MAX`.
    pub fn submit_guess(&mut self, candidate: &str) -> GuessOutcome {
        if candidate.to_lowercase() == self.current_word.to_lowercase() {
            self.score = self.score.saturating_add(self.settings.score_increment);
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        }
    }

    /// Move to the next round, or report that the game is over.
    pub fn next_word(&mut self) -> Advance {
        if self.round_count >= self.settings.max_rounds {
            return Advance::GameOver;
        }
        self.advance();
        Advance::Advanced
    }

    /// Reset score and rounds and deal the first word of a new game
    pub fn restart(&mut self) {
        self.score = 0;
        self.round_count = 0;
        self.used_words.clear();
        self.advance();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round_count(&self) -> usize {
        self.round_count
    }

    pub fn max_rounds(&self) -> usize {
        self.settings.max_rounds
    }

    pub fn score_increment(&self) -> u32 {
        self.settings.score_increment
    }

    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    /// True once the last round has been dealt; the next `next_word` ends
    /// the game.
    pub fn is_final_round(&self) -> bool {
        self.round_count >= self.settings.max_rounds
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            scrambled_word: self.current_scrambled.clone(),
            score: self.score,
            round: self.round_count,
            max_rounds: self.settings.max_rounds,
        }
    }

    /// Pick an unused word, scramble it and count the round. Terminates
    /// because `max_rounds <= pool.len()` was checked at start and callers
    /// only advance while `round_count < max_rounds`.
    fn advance(&mut self) {
        debug_assert!(self.used_words.len() < self.pool.len());

        let word = loop {
            let index = self.rng.random_range(0..self.pool.len());
            let Some(candidate) = self.pool.get(index) else {
                continue;
            };
            if !self.used_words.contains(candidate) {
                break candidate.to_string();
            }
        };

        self.current_scrambled = scramble(&word, &mut self.rng);
        self.used_words.insert(word.clone());
        self.current_word = word;
        self.round_count += 1;

        tracing::debug!(
            "Round {}/{}: dealt '{}' as '{}'",
            self.round_count,
            self.settings.max_rounds,
            self.current_word,
            self.current_scrambled
        );
    }

    #[cfg(test)]
    pub(crate) fn current_word(&self) -> &str {
        &self.current_word
    }

    #[cfg(test)]
    pub(crate) fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }
}
