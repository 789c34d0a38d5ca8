use rand::RngCore;

use crate::game::{Move, MoveHistory};

use super::types::{ComputerStrategy, StrategyKind};

/// Peeks at the player's current move and plays its counter
pub struct CheatStrategy;

impl CheatStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheatStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for CheatStrategy {
    fn decide(&self, player_move: Move, _history: &MoveHistory, _rng: &mut dyn RngCore) -> Move {
        player_move.counter()
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Cheat
    }
}
