//! HTTP binding for the engine contract.
//!
//! Thin JSON glue over [`GameService`]; every route maps 1:1 onto one
//! engine operation and holds no state of its own.

use crate::error::GameError;
use crate::service::GameService;
use crate::session::{Player, Session, SessionId};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Request carrying only a player name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerNameRequest {
    /// Display name of the caller.
    pub name: String,
}

/// Request for making a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeMoveRequest {
    /// Player ID returned at join time.
    pub player_id: String,
    /// Target row (0-2).
    pub row: usize,
    /// Target column (0-2).
    pub col: usize,
}

/// Response for session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameResponse {
    /// Id of the new session.
    pub session_id: SessionId,
}

/// Response for matchmaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Id of the joined or created session.
    pub session_id: SessionId,
    /// The caller's player record, including the assigned mark.
    pub player: Player,
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = match self {
            GameError::GameNotFound => StatusCode::NOT_FOUND,
            GameError::GameFull | GameError::NotYourTurn | GameError::GameNotInProgress => {
                StatusCode::CONFLICT
            }
            GameError::PlayerNotInGame => StatusCode::FORBIDDEN,
            GameError::InvalidMove => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let body = Json(serde_json::json!({
            "error": self,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Builds the router over a shared service.
pub fn router(service: Arc<GameService>) -> Router {
    Router::new()
        .route("/games", post(create_game).get(list_open_games))
        .route("/games/match", post(find_or_create_game))
        .route("/games/{id}", get(get_game_state))
        .route("/games/{id}/join", post(join_game))
        .route("/games/{id}/moves", post(make_move))
        .with_state(service)
}

#[instrument(skip(service, req), fields(name = %req.name))]
async fn create_game(
    State(service): State<Arc<GameService>>,
    Json(req): Json<PlayerNameRequest>,
) -> Json<CreateGameResponse> {
    let session_id = service.create_game(&req.name);
    info!(session_id = %session_id, "Created game over HTTP");
    Json(CreateGameResponse { session_id })
}

#[instrument(skip(service, req), fields(session_id = %id, name = %req.name))]
async fn join_game(
    State(service): State<Arc<GameService>>,
    Path(id): Path<String>,
    Json(req): Json<PlayerNameRequest>,
) -> Result<Json<Player>, GameError> {
    let player = service.join_game(&id, &req.name)?;
    info!(player_id = %player.id, "Joined game over HTTP");
    Ok(Json(player))
}

#[instrument(skip(service, req), fields(name = %req.name))]
async fn find_or_create_game(
    State(service): State<Arc<GameService>>,
    Json(req): Json<PlayerNameRequest>,
) -> Json<MatchResponse> {
    let (session_id, player) = service.find_or_create_game(&req.name);
    info!(session_id = %session_id, player_id = %player.id, "Matched over HTTP");
    Json(MatchResponse { session_id, player })
}

#[instrument(skip(service))]
async fn list_open_games(State(service): State<Arc<GameService>>) -> Json<Vec<SessionId>> {
    let open = service.list_open_games();
    debug!(open = open.len(), "Listed open games over HTTP");
    Json(open)
}

#[instrument(skip(service, req), fields(session_id = %id, player_id = %req.player_id))]
async fn make_move(
    State(service): State<Arc<GameService>>,
    Path(id): Path<String>,
    Json(req): Json<MakeMoveRequest>,
) -> Result<Json<Session>, GameError> {
    let session = service.make_move(&id, &req.player_id, req.row, req.col)?;
    Ok(Json(session))
}

#[instrument(skip(service), fields(session_id = %id))]
async fn get_game_state(
    State(service): State<Arc<GameService>>,
    Path(id): Path<String>,
) -> Result<Json<Session>, GameError> {
    let session = service.get_game_state(&id)?;
    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (GameError::GameNotFound, StatusCode::NOT_FOUND),
            (GameError::GameFull, StatusCode::CONFLICT),
            (GameError::NotYourTurn, StatusCode::CONFLICT),
            (GameError::GameNotInProgress, StatusCode::CONFLICT),
            (GameError::PlayerNotInGame, StatusCode::FORBIDDEN),
            (GameError::InvalidMove, StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
