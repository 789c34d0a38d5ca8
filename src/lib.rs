// Library crate for the rock-paper-scissors engine and its HTTP shell
// This file exposes the public API for integration tests

pub mod bot;
pub mod config;
pub mod game;
pub mod session;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use bot::{ComputerStrategy, StrategyKind, StrategySelector};
pub use config::ServerConfig;
pub use game::{GameEngine, GameError, Move, RoundOutcome, RoundReport, ScoreBoard, Winner};
pub use shared::{AppError, AppState};
