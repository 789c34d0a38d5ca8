// Public API
pub use engine::{GameEngine, RoundOutcome, RoundReport};
pub use history::{MoveCounts, MoveHistory};
pub use moves::Move;
pub use resolver::{Resolution, RoundResolver};
pub use score::{ScoreBoard, Winner};

mod engine;
mod history;
mod moves;
mod resolver;
mod score;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid move: {0:?} (expected rock, paper or scissors)")]
    InvalidMove(String),
}
