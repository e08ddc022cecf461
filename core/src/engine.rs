use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    RoundWon,
    GameOver,
}

impl GameState {
    pub const fn is_round_won(self) -> bool {
        matches!(self, Self::RoundWon)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    round: Round,
    lives: Lives,
    points: Points,
}

impl GameEngine {
    pub fn new(config: GameConfig, round: Round) -> Self {
        Self {
            round,
            lives: config.starting_lives,
            points: 0,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn lives(&self) -> Lives {
        self.lives
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn state(&self) -> GameState {
        if self.lives == 0 {
            GameState::GameOver
        } else if self.round.is_solved() {
            GameState::RoundWon
        } else {
            GameState::Playing
        }
    }

    pub fn is_over(&self) -> bool {
        self.state().is_over()
    }

    /// Applies one guess. Total over every input: a candidate that is not on
    /// the board is just another wrong guess, and guesses arriving after the
    /// round or the game is decided report `NoChange`.
    pub fn submit_answer(&mut self, candidate: Color) -> GuessOutcome {
        use GuessOutcome::*;

        if self.lives == 0 || self.round.is_solved() {
            return NoChange;
        }

        if candidate == self.round.correct_answer() {
            self.round.mark_solved();
            self.points += 1;
            RoundWon
        } else if self.lives > 1 {
            self.round.eliminate(candidate);
            self.lives -= 1;
            Eliminated
        } else {
            self.lives = 0;
            GameOver
        }
    }

    /// Swaps in the next round, lives and points carry over. Only meaningful
    /// once the current round is solved, the caller keeps the control hidden
    /// otherwise.
    pub fn start_next_round(&mut self, round: Round) {
        self.round = round;
    }
}
