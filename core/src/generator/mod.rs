use crate::*;
pub use random::*;

mod random;

/// Builds the candidate set of one round.
pub trait RoundGenerator {
    fn generate(self, config: GameConfig) -> Round;
}
