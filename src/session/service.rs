use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    models::{GameResponse, RoundResponse},
    repository::GameRepository,
};
use crate::game::{GameEngine, Move};
use crate::shared::AppError;

/// Service for creating games and playing rounds
pub struct GameService {
    repository: Arc<dyn GameRepository>,
    seed: Option<u64>,
    games_created: AtomicU64,
}

impl GameService {
    /// When `seed` is set, the n-th game created is seeded with `seed + n`
    pub fn new(repository: Arc<dyn GameRepository>, seed: Option<u64>) -> Self {
        Self {
            repository,
            seed,
            games_created: AtomicU64::new(0),
        }
    }

    fn new_engine(&self) -> GameEngine {
        let index = self.games_created.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => GameEngine::seeded(seed.wrapping_add(index)),
            None => GameEngine::from_os_rng(),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_game(&self) -> Result<GameResponse, AppError> {
        let game_id = Uuid::new_v4().to_string();
        self.repository
            .create_game(&game_id, self.new_engine())
            .await?;

        info!(game_id = %game_id, "Game created");

        self.get_game(&game_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<GameResponse, AppError> {
        self.repository
            .get_game(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
    }

    #[instrument(skip(self))]
    pub async fn play_round(
        &self,
        game_id: &str,
        player_move: Move,
    ) -> Result<RoundResponse, AppError> {
        let report = self
            .repository
            .play_round(game_id, player_move)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))?;

        info!(
            game_id = %game_id,
            summary = %report.outcome,
            "Round played"
        );

        Ok(RoundResponse::from_report(game_id, &report))
    }
}
