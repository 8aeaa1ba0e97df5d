use crate::{
    game::GameSnapshot,
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
    pub state: GameSnapshot,
}

/// Start a new game and register it for later requests
pub async fn create_game(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<CreateGameResponse>), StatusCode> {
    if state.active_games.len() >= state.config.game.max_active_games {
        tracing::warn!(
            "Refusing new game: {} games already active",
            state.active_games.len()
        );
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let session = state.new_session().map_err(|e| {
        tracing::error!("Failed to start game: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let game_id = Uuid::new_v4();
    let snapshot = session.game().snapshot();
    state.active_games.insert(game_id, session);

    tracing::info!(
        "Created game {} ({} active)",
        game_id,
        state.active_games.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse {
            game_id,
            state: snapshot,
        }),
    ))
}

/// Current view of a game
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameSnapshot>, StatusCode> {
    let session = state
        .active_games
        .get(&game_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(session.game().snapshot()))
}

/// Apply one player command to a game
pub async fn apply_action(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(action): Json<ClientMessage>,
) -> Result<Json<Vec<ServerMessage>>, StatusCode> {
    let mut session = state
        .active_games
        .get_mut(&game_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    tracing::debug!("Game {}: {:?}", game_id, action);
    let replies = session.handle(action);

    Ok(Json(replies))
}

/// Abandon a game
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    state
        .active_games
        .remove(&game_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    tracing::info!("Deleted game {}", game_id);
    Ok(StatusCode::NO_CONTENT)
}
