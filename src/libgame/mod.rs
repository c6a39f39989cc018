//! the game itself, free of any window:
//! the three hands, how they compare, where the computer's hand comes from
//! and how a session keeps score

pub mod choice;
pub mod generator;
pub mod outcome;
pub mod resolver;
pub mod score;

pub use choice::Choice;
pub use generator::MoveGenerator;
pub use outcome::{Outcome, Tone};
pub use resolver::{resolve, RoundResult};
pub use score::Scoreboard;
