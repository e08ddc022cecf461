use super::*;

/// Purely random strategy, every channel of every candidate drawn uniformly
/// and the correct answer picked uniformly among the candidates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomRoundGenerator {
    seed: u64,
}

impl RandomRoundGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RoundGenerator for RandomRoundGenerator {
    fn generate(self, config: GameConfig) -> Round {
        use rand::prelude::*;

        let candidates = if config.candidates < 2 {
            log::warn!(
                "requested {} candidates, padding to 2",
                config.candidates
            );
            2
        } else {
            config.candidates
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut answers = AnswerList::new();
        for _ in 0..candidates {
            answers.push(Color::random(&mut rng));
        }
        let correct_answer = answers[rng.random_range(0..answers.len())];

        // double check for candidate collisions
        for (i, first) in answers.iter().enumerate() {
            if answers[i + 1..].contains(first) {
                log::warn!(
                    "generated duplicate candidate {}, equal swatches are eliminated together",
                    first.hex_code()
                );
            }
        }

        Round::from_parts(answers, correct_answer)
            .expect("correct answer was drawn from the candidates")
    }
}
