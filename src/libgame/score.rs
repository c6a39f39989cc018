use crate::libgame::Outcome;

/// win/loss/tie tally for the running session, kept in memory only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::UserWins => self.wins += 1,
            Outcome::ComputerWins => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}
