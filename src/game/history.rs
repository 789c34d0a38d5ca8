use serde::{Deserialize, Serialize};

use super::Move;

/// Frequency counters of the player's moves plus the most recent one.
///
/// Counters only ever grow; the history lives as long as the game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    counts: [u32; 3],
    last_move: Option<Move>,
}

/// Snapshot of the per-move counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounts {
    pub rock: u32,
    pub paper: u32,
    pub scissors: u32,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved round's player move
    pub fn record_player_move(&mut self, player_move: Move) {
        self.counts[player_move.index()] += 1;
        self.last_move = Some(player_move);
    }

    pub fn counts(&self) -> MoveCounts {
        MoveCounts {
            rock: self.count(Move::Rock),
            paper: self.count(Move::Paper),
            scissors: self.count(Move::Scissors),
        }
    }

    pub fn count(&self, player_move: Move) -> u32 {
        self.counts[player_move.index()]
    }

    /// None until the first round has been recorded
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
impl MoveHistory {
    /// Build a history with the given counters and no last move
    pub(crate) fn with_counts(rock: u32, paper: u32, scissors: u32) -> Self {
        Self {
            counts: [rock, paper, scissors],
            last_move: None,
        }
    }
}
