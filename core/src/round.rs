use alloc::string::String;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Candidate pool of a round, kept inline at the default round size.
pub type AnswerList = SmallVec<[Color; DEFAULT_CANDIDATES as usize]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    answers: AnswerList,
    correct_answer: Color,
    solved: bool,
}

impl Round {
    /// Builds a round over a fixed candidate list. The correct answer must be
    /// one of the candidates.
    pub fn from_parts(answers: AnswerList, correct_answer: Color) -> Result<Self> {
        if answers.is_empty() {
            return Err(GameError::NotEnoughCandidates);
        }
        if !answers.contains(&correct_answer) {
            return Err(GameError::CorrectAnswerMissing);
        }
        Ok(Self {
            answers,
            correct_answer,
            solved: false,
        })
    }

    pub fn answers(&self) -> &[Color] {
        &self.answers
    }

    pub fn correct_answer(&self) -> Color {
        self.correct_answer
    }

    /// True from the moment the correct answer was guessed until the next
    /// round replaces this one.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Code the player has to match, always the correct answer's.
    pub fn color_code(&self) -> String {
        self.correct_answer.hex_code()
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    /// Drops every candidate equal to `candidate`. Only wrong guesses are
    /// routed through here, so the correct answer always stays on the board.
    pub(crate) fn eliminate(&mut self, candidate: Color) {
        self.answers.retain(|answer| *answer != candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);

    #[test]
    fn from_parts_requires_the_correct_answer_on_the_board() {
        let answers = AnswerList::from_slice(&[RED, GREEN]);

        assert_eq!(
            Round::from_parts(answers, BLUE),
            Err(GameError::CorrectAnswerMissing)
        );
    }

    #[test]
    fn from_parts_rejects_an_empty_candidate_list() {
        assert_eq!(
            Round::from_parts(AnswerList::new(), RED),
            Err(GameError::NotEnoughCandidates)
        );
    }

    #[test]
    fn fresh_round_is_unsolved() {
        let round = Round::from_parts(AnswerList::from_slice(&[RED, GREEN]), RED).unwrap();

        assert!(!round.is_solved());
        assert_eq!(round.answers(), &[RED, GREEN][..]);
    }

    #[test]
    fn color_code_comes_from_the_correct_answer() {
        let round = Round::from_parts(AnswerList::from_slice(&[RED, GREEN]), GREEN).unwrap();

        assert_eq!(round.color_code(), "#00FF00");
    }

    #[test]
    fn elimination_removes_equal_values_together() {
        let twin = Color::opaque(0.25, 0.25, 0.25);
        let mut round =
            Round::from_parts(AnswerList::from_slice(&[twin, GREEN, twin]), GREEN).unwrap();

        round.eliminate(twin);

        assert_eq!(round.answers(), &[GREEN][..]);
        assert_eq!(round.correct_answer(), GREEN);
    }
}
