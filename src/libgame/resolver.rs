use crate::libgame::{Choice, Outcome, Tone};

/// what the shell needs to render one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: Outcome,
    /// always the computer's actual hand
    pub opposing: Choice,
    pub tone: Tone,
}

pub fn resolve(user: Choice, computer: Choice) -> RoundResult {
    use Choice::*;

    let outcome = match (user, computer) {
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Outcome::Tie,
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Outcome::UserWins,
        (Rock, Paper) | (Scissors, Rock) | (Paper, Scissors) => Outcome::ComputerWins,
    };

    RoundResult {
        outcome,
        opposing: computer,
        tone: outcome.tone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<(Choice, Choice)> {
        Choice::ALL
            .iter()
            .flat_map(|a| Choice::ALL.iter().map(move |b| (*a, *b)))
            .collect()
    }

    #[test]
    fn test_resolve_scenarios() {
        assert_eq!(
            resolve(Choice::Rock, Choice::Scissors),
            RoundResult {
                outcome: Outcome::UserWins,
                opposing: Choice::Scissors,
                tone: Tone::Positive,
            }
        );
        assert_eq!(
            resolve(Choice::Rock, Choice::Paper),
            RoundResult {
                outcome: Outcome::ComputerWins,
                opposing: Choice::Paper,
                tone: Tone::Negative,
            }
        );
        assert_eq!(
            resolve(Choice::Paper, Choice::Paper),
            RoundResult {
                outcome: Outcome::Tie,
                opposing: Choice::Paper,
                tone: Tone::Warning,
            }
        );
        assert_eq!(
            resolve(Choice::Scissors, Choice::Rock),
            RoundResult {
                outcome: Outcome::ComputerWins,
                opposing: Choice::Rock,
                tone: Tone::Negative,
            }
        );
    }

    #[test]
    fn test_same_hand_is_tie() {
        for c in Choice::ALL.iter() {
            assert_eq!(resolve(*c, *c).outcome, Outcome::Tie);
        }
    }

    #[test]
    fn test_antisymmetric() {
        for (a, b) in pairs().into_iter().filter(|(a, b)| a != b) {
            let forward = resolve(a, b).outcome;
            let backward = resolve(b, a).outcome;
            assert_ne!(forward, Outcome::Tie);
            assert_eq!(forward, backward.flipped());
            assert!((forward == Outcome::UserWins) ^ (backward == Outcome::UserWins));
        }
    }

    #[test]
    fn test_agrees_with_beats() {
        for (a, b) in pairs() {
            let expected = if a.beats(b) {
                Outcome::UserWins
            } else if b.beats(a) {
                Outcome::ComputerWins
            } else {
                Outcome::Tie
            };
            let result = resolve(a, b);
            assert_eq!(result.outcome, expected, "{} vs {}", a, b);
            assert_eq!(result.opposing, b);
            assert_eq!(result.tone, expected.tone());
        }
    }
}
