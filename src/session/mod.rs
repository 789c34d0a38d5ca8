// Public API - what other modules can use
pub use handlers::{create_game, get_game, play_round};
pub use service::GameService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::shared::AppState;

/// Router exposing the game over HTTP
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/games", post(create_game))
        .route("/games/:id", get(get_game))
        .route("/games/:id/rounds", post(play_round))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
