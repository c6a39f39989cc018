#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Tie,
    UserWins,
    ComputerWins,
}

/// display class of an outcome, the shell picks the actual color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Warning,
    Positive,
    Negative,
}

impl Outcome {
    pub fn tone(self) -> Tone {
        match self {
            Outcome::Tie => Tone::Warning,
            Outcome::UserWins => Tone::Positive,
            Outcome::ComputerWins => Tone::Negative,
        }
    }

    /// the same round seen from the computer's side
    pub fn flipped(self) -> Outcome {
        match self {
            Outcome::Tie => Outcome::Tie,
            Outcome::UserWins => Outcome::ComputerWins,
            Outcome::ComputerWins => Outcome::UserWins,
        }
    }
}
