use crate::libgame::{resolve, Choice, RoundResult, Scoreboard};
use log::info;

pub enum GameState {
    WaitingForChoice,
    GotOutcome { yours: Choice, result: RoundResult },
}

pub struct Session {
    pub state: GameState,
    pub scores: Scoreboard,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: GameState::WaitingForChoice,
            scores: Scoreboard::default(),
        }
    }

    /// resolves one round, replacing whatever the last round showed
    pub fn play(&mut self, yours: Choice, computer: Choice) -> RoundResult {
        let result = resolve(yours, computer);
        self.scores.record(result.outcome);
        self.state = GameState::GotOutcome { yours, result };
        info!(
            "round {}: {} vs {} -> {:?}",
            self.scores.rounds(),
            yours,
            computer,
            result.outcome
        );
        result
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libgame::Outcome;

    #[test]
    fn test_play_records_round() {
        let mut session = Session::new();
        assert!(matches!(session.state, GameState::WaitingForChoice));

        let result = session.play(Choice::Rock, Choice::Scissors);
        assert_eq!(result.outcome, Outcome::UserWins);
        assert_eq!(result.opposing, Choice::Scissors);
        assert_eq!(session.scores.wins, 1);

        match session.state {
            GameState::GotOutcome { yours, result } => {
                assert_eq!(yours, Choice::Rock);
                assert_eq!(result.opposing, Choice::Scissors);
            }
            _ => panic!("expected an outcome"),
        }
    }

    #[test]
    fn test_play_overwrites_last_round() {
        let mut session = Session::new();
        session.play(Choice::Rock, Choice::Paper);
        session.play(Choice::Paper, Choice::Paper);

        match session.state {
            GameState::GotOutcome { yours, result } => {
                assert_eq!(yours, Choice::Paper);
                assert_eq!(result.outcome, Outcome::Tie);
            }
            _ => panic!("expected an outcome"),
        }
        assert_eq!(session.scores.losses, 1);
        assert_eq!(session.scores.ties, 1);
        assert_eq!(session.scores.rounds(), 2);
    }
}
