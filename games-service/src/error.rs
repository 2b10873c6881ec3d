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

//! The one place request failures become HTTP responses.
//!
//! Handlers and extractors only return [`ApiError`]; the status code and JSON
//! body are chosen here. Internal details are logged and never sent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use games_common::{ErrorBody, INTERNAL_ERROR, NOT_FOUND_ERROR, ValidationIssue};
use tracing::{error, warn};

use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<ValidationIssue>),
    NotFound,
    Internal(String),
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::ConstraintViolation(_) | StoreError::Unknown(_) => {
                Self::Internal(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(issues) => {
                warn!(%status, issues = ?issues, "request failed validation");
                ErrorBody::invalid(issues)
            }
            Self::NotFound => {
                warn!(%status, "game not found");
                ErrorBody::message(NOT_FOUND_ERROR)
            }
            Self::Internal(detail) => {
                error!(%status, detail = %detail, "request failed");
                ErrorBody::message(INTERNAL_ERROR)
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_render_issues() {
        let (status, body) = render(ApiError::Validation(vec![ValidationIssue::new(
            "body.title",
            "title must be at least 3 characters",
        )]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "invalid input",
                "issues": [{"field": "body.title", "message": "title must be at least 3 characters"}]
            })
        );
    }

    #[tokio::test]
    async fn not_found_renders_fixed_message() {
        let (status, body) = render(ApiError::from(StoreError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "game not found"}));
    }

    #[tokio::test]
    async fn store_failures_hide_details() {
        for failure in [
            StoreError::Unknown("database is locked".to_string()),
            StoreError::ConstraintViolation("UNIQUE constraint failed: games.id".to_string()),
        ] {
            let (status, body) = render(ApiError::from(failure)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({"error": "internal server error"}));
        }
    }
}
