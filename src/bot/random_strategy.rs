use rand::{Rng, RngCore};

use crate::game::{Move, MoveHistory};

use super::types::{ComputerStrategy, StrategyKind};

const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Uniformly random move, ignores all input
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn pick(rng: &mut dyn RngCore) -> Move {
        MOVES[rng.random_range(0..MOVES.len())]
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for RandomStrategy {
    fn decide(&self, _player_move: Move, _history: &MoveHistory, rng: &mut dyn RngCore) -> Move {
        Self::pick(rng)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }
}
