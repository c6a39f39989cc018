use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    /// file stem of the image for this hand
    pub fn asset_name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_cyclic() {
        assert!(Choice::Rock.beats(Choice::Scissors));
        assert!(Choice::Scissors.beats(Choice::Paper));
        assert!(Choice::Paper.beats(Choice::Rock));
    }

    #[test]
    fn test_no_other_dominance() {
        let mut count = 0;
        for a in Choice::ALL.iter() {
            for b in Choice::ALL.iter() {
                if a.beats(*b) {
                    count += 1;
                    assert!(!b.beats(*a));
                }
            }
            assert!(!a.beats(*a));
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(Choice::Rock.asset_name(), "rock");
        assert_eq!(Choice::Paper.asset_name(), "paper");
        assert_eq!(Choice::Scissors.asset_name(), "scissors");
        assert_eq!(Choice::Scissors.to_string(), "Scissors");
    }
}
