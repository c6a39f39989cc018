use crate::libgame::{Choice, Outcome, Scoreboard};

pub struct Strings {
    pub title: &'static str,
    pub header: &'static str,
    pub player: &'static str,
    pub vs: &'static str,
    pub computer: &'static str,
    pub rock: &'static str,
    pub paper: &'static str,
    pub scissors: &'static str,
    pub tie: &'static str,
    pub human_win: &'static str,
    pub computer_win: &'static str,
    pub prompt: &'static str,
}

pub const EN: Strings = Strings {
    title: "Rock Paper Scissors",
    header: "Player vs Computer",
    player: "Player",
    vs: "VS",
    computer: "Computer",
    rock: "Rock",
    paper: "Paper",
    scissors: "Scissors",
    tie: "It's a tie!",
    human_win: "You win!",
    computer_win: "Computer wins!",
    prompt: "Pick a hand",
};

impl Strings {
    pub fn choice(&self, choice: Choice) -> &'static str {
        match choice {
            Choice::Rock => self.rock,
            Choice::Paper => self.paper,
            Choice::Scissors => self.scissors,
        }
    }

    pub fn outcome(&self, outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Tie => self.tie,
            Outcome::UserWins => self.human_win,
            Outcome::ComputerWins => self.computer_win,
        }
    }

    pub fn score(&self, scores: &Scoreboard) -> String {
        format!(
            "Wins {} / Losses {} / Ties {}",
            scores.wins, scores.losses, scores.ties
        )
    }
}
