use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Computer,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Winner::Player => "Player",
                Winner::Computer => "Computer",
                Winner::Tie => "Tie",
            }
        )
    }
}

/// Running tally of round results.
///
/// The three counters always sum to the number of rounds played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    player_wins: u32,
    computer_wins: u32,
    ties: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Computer => self.computer_wins += 1,
            Winner::Tie => self.ties += 1,
        }
    }

    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    pub fn computer_wins(&self) -> u32 {
        self.computer_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn rounds_played(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}
