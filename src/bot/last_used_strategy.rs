use rand::RngCore;
use tracing::debug;

use crate::game::{Move, MoveHistory};

use super::{
    random_strategy::RandomStrategy,
    types::{ComputerStrategy, StrategyKind},
};

/// Assumes the player repeats their previous move
pub struct LastUsedStrategy;

impl LastUsedStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LastUsedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for LastUsedStrategy {
    fn decide(&self, _player_move: Move, history: &MoveHistory, rng: &mut dyn RngCore) -> Move {
        match history.last_move() {
            Some(last) => last.counter(),
            None => {
                debug!("No previous player move, falling back to random");
                RandomStrategy::pick(rng)
            }
        }
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::LastUsed
    }
}
