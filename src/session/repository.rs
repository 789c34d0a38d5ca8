use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument, warn};

use super::models::GameResponse;
use crate::game::{GameEngine, Move, RoundReport};
use crate::shared::AppError;

/// Trait for game repository operations
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game_id: &str, engine: GameEngine) -> Result<(), AppError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<GameResponse>, AppError>;

    /// Plays a round on the stored engine. Rounds for one game never overlap.
    /// Returns None if the game does not exist.
    async fn play_round(
        &self,
        game_id: &str,
        player_move: Move,
    ) -> Result<Option<RoundReport>, AppError>;
}

/// In-memory implementation of GameRepository.
///
/// Games are lost when the process restarts.
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, Arc<Mutex<GameEngine>>>>,
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
        }
    }

    async fn engine(&self, game_id: &str) -> Option<Arc<Mutex<GameEngine>>> {
        self.games.read().await.get(game_id).cloned()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, engine))]
    async fn create_game(&self, game_id: &str, engine: GameEngine) -> Result<(), AppError> {
        debug!(game_id = %game_id, "Creating game in memory");

        let mut games = self.games.write().await;
        if games.contains_key(game_id) {
            warn!(game_id = %game_id, "Game already exists in memory");
            return Err(AppError::Conflict(format!("Game {} already exists", game_id)));
        }
        games.insert(game_id.to_string(), Arc::new(Mutex::new(engine)));

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<GameResponse>, AppError> {
        let Some(engine) = self.engine(game_id).await else {
            debug!(game_id = %game_id, "Game not found in memory");
            return Ok(None);
        };

        let engine = engine.lock().await;
        Ok(Some(GameResponse {
            id: game_id.to_string(),
            scores: engine.scores(),
            move_counts: engine.history().counts(),
            last_move: engine.history().last_move(),
        }))
    }

    #[instrument(skip(self))]
    async fn play_round(
        &self,
        game_id: &str,
        player_move: Move,
    ) -> Result<Option<RoundReport>, AppError> {
        let Some(engine) = self.engine(game_id).await else {
            debug!(game_id = %game_id, "Game not found in memory");
            return Ok(None);
        };

        let mut engine = engine.lock().await;
        Ok(Some(engine.play_round(player_move)))
    }
}
