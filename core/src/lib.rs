#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use color::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use round::*;

mod color;
mod engine;
mod error;
mod generator;
mod round;

/// Countable resource lost on wrong guesses, the game ends at zero.
pub type Lives = u8;

/// Score counter, one point per round won.
pub type Points = u32;

/// Number of candidate swatches shown in a round.
pub type CandidateCount = u8;

pub const DEFAULT_CANDIDATES: CandidateCount = 4;
pub const STARTING_LIVES: Lives = 5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub candidates: CandidateCount,
    pub starting_lives: Lives,
}

impl GameConfig {
    pub const fn new_unchecked(candidates: CandidateCount, starting_lives: Lives) -> Self {
        Self {
            candidates,
            starting_lives,
        }
    }

    pub fn new(candidates: CandidateCount, starting_lives: Lives) -> Self {
        let candidates = candidates.clamp(2, CandidateCount::MAX);
        let starting_lives = starting_lives.clamp(1, Lives::MAX);
        Self::new_unchecked(candidates, starting_lives)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_CANDIDATES, STARTING_LIVES)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    NoChange,
    Eliminated,
    RoundWon,
    GameOver,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            NoChange => false,
            Eliminated => true,
            RoundWon => true,
            GameOver => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_degenerate_values() {
        let config = GameConfig::new(0, 0);

        assert_eq!(config.candidates, 2);
        assert_eq!(config.starting_lives, 1);
    }

    #[test]
    fn default_config_matches_the_classic_game() {
        let config = GameConfig::default();

        assert_eq!(config.candidates, 4);
        assert_eq!(config.starting_lives, 5);
    }
}
