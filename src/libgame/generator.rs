use crate::libgame::Choice;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// the computer's hand, uniform over the three choices and blind to the user's
pub struct MoveGenerator<R: Rng> {
    rng: R,
}

impl MoveGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        MoveGenerator::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        MoveGenerator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveGenerator<R> {
    pub fn new(rng: R) -> Self {
        MoveGenerator { rng }
    }

    pub fn next_move(&mut self) -> Choice {
        // ALL is never empty
        *Choice::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Choice::Rock)
    }
}

impl<R: Rng> Iterator for MoveGenerator<R> {
    type Item = Choice;

    fn next(&mut self) -> Option<Choice> {
        Some(self.next_move())
    }
}
