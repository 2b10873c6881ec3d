// Copyright (C) 2026 StarHuntingGames
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use axum::{
    Json,
    extract::{FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
};
use games_common::{ErrorBody, Game, GameId, GamePayload};
use tracing::info;

use crate::{app::AppState, error::ApiError, validation::ValidatedGame};

/// `GET /games`
#[utoipa::path(
    get,
    path = "/games",
    tag = "Games",
    responses(
        (status = 200, description = "Every game in the catalog", body = [Game]),
    )
)]
pub async fn list_games_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = state.store.find_all().await?;
    Ok(Json(games))
}

/// `GET /games/{id}`
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "Games",
    params(("id" = i32, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "The requested game", body = Game),
        (status = 404, description = "No game with this id", body = ErrorBody),
    )
)]
pub async fn get_game_handler(
    State(state): State<AppState>,
    GameIdPath(id): GameIdPath,
) -> Result<Json<Game>, ApiError> {
    let game = state.store.find_by_id(id).await?;
    Ok(Json(game))
}

/// `POST /games`
#[utoipa::path(
    post,
    path = "/games",
    tag = "Games",
    request_body = GamePayload,
    responses(
        (status = 201, description = "Game created", body = Game),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn create_game_handler(
    State(state): State<AppState>,
    ValidatedGame(payload): ValidatedGame,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state.store.create(payload).await?;
    info!(game_id = game.id, "game created");
    Ok((StatusCode::CREATED, Json(game)))
}

/// `PUT /games/{id}`
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "Games",
    params(("id" = i32, Path, description = "Game identifier")),
    request_body = GamePayload,
    responses(
        (status = 200, description = "Game updated", body = Game),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 404, description = "No game with this id", body = ErrorBody),
    )
)]
pub async fn update_game_handler(
    State(state): State<AppState>,
    GameIdPath(id): GameIdPath,
    ValidatedGame(payload): ValidatedGame,
) -> Result<Json<Game>, ApiError> {
    let game = state.store.update_by_id(id, payload).await?;
    info!(game_id = game.id, "game updated");
    Ok(Json(game))
}

/// `DELETE /games/{id}`
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "Games",
    params(("id" = i32, Path, description = "Game identifier")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "No game with this id", body = ErrorBody),
    )
)]
pub async fn delete_game_handler(
    State(state): State<AppState>,
    GameIdPath(id): GameIdPath,
) -> Result<StatusCode, ApiError> {
    state.store.delete_by_id(id).await?;
    info!(game_id = id, "game deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// The `{id}` path segment as a [`GameId`].
///
/// A segment that is not an integer (or not even valid UTF-8 once decoded)
/// can never name a stored game, so it is rejected as a miss before the
/// store is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameIdPath(pub GameId);

impl<S> FromRequestParts<S> for GameIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        parse_game_id(&raw).map(Self)
    }
}

fn parse_game_id(raw: &str) -> Result<GameId, ApiError> {
    raw.parse::<GameId>().map_err(|_| ApiError::NotFound)
}
