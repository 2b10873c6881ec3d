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

//! OpenAPI document and browsable UI under `/api-docs`.

use std::sync::OnceLock;

use axum::{
    Router,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use games_common::{ErrorBody, Game, GamePayload, ValidationIssue};
use utoipa::OpenApi;

use crate::error::ApiError;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Games API",
        version = env!("CARGO_PKG_VERSION"),
        description = "CRUD over the game catalog."
    ),
    paths(
        crate::handlers::list_games_handler,
        crate::handlers::get_game_handler,
        crate::handlers::create_game_handler,
        crate::handlers::update_game_handler,
        crate::handlers::delete_game_handler,
    ),
    components(schemas(Game, GamePayload, ErrorBody, ValidationIssue)),
    tags((name = "Games", description = "Game catalog operations")),
)]
pub struct GamesApiDoc;

static OPENAPI_JSON_CACHE: OnceLock<String> = OnceLock::new();

pub fn openapi_json() -> Result<String, serde_json::Error> {
    if let Some(spec) = OPENAPI_JSON_CACHE.get() {
        return Ok(spec.clone());
    }

    let spec = serde_json::to_string_pretty(&GamesApiDoc::openapi())?;
    let _ = OPENAPI_JSON_CACHE.set(spec.clone());
    Ok(spec)
}

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Games API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api-docs", get(swagger_ui))
        .route(OPENAPI_PATH, get(openapi_handler))
}

async fn openapi_handler() -> Result<impl IntoResponse, ApiError> {
    let spec = openapi_json()
        .map_err(|error| ApiError::internal(format!("failed to render openapi: {error}")))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], spec))
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}
