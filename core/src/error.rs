use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid color code")]
    InvalidColorCode,
    #[error("Correct answer is not among the candidates")]
    CorrectAnswerMissing,
    #[error("Not enough candidates for a round")]
    NotEnoughCandidates,
}

pub type Result<T> = core::result::Result<T, GameError>;
