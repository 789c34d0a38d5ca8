use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{info, instrument};

use super::models::{GameResponse, PlayRoundRequest, RoundResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for starting a new game
///
/// POST /games
#[instrument(name = "create_game", skip(state))]
pub async fn create_game(State(state): State<AppState>) -> Result<Json<GameResponse>, AppError> {
    let game = state.game_service.create_game().await?;
    Ok(Json(game))
}

/// HTTP handler for fetching the scores of a game
///
/// GET /games/:id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, AppError> {
    let game = state.game_service.get_game(&game_id).await?;
    Ok(Json(game))
}

/// HTTP handler for playing one round
///
/// POST /games/:id/rounds
/// Body: {"move": "rock"} (also accepts "R", "paper", "S", ...)
#[instrument(name = "play_round", skip(state, payload))]
pub async fn play_round(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    payload: Result<Json<PlayRoundRequest>, JsonRejection>,
) -> Result<Json<RoundResponse>, AppError> {
    let Json(request) = payload?;
    let player_move = request.player_move()?;
    info!(game_id = %game_id, player_move = %player_move, "Playing round");

    let round = state.game_service.play_round(&game_id, player_move).await?;

    Ok(Json(round))
}
