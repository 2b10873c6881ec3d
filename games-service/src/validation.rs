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

//! Request validation that runs before a handler body, and therefore before
//! any store call.
//!
//! A request is described as a JSON object with `body`, `params` and `query`
//! members. A [`RequestSchema`] checks declared string fields against that
//! description and reports one [`ValidationIssue`] per violated rule, with
//! the field path dot-joined (`body.title`).

use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
};
use games_common::{
    GamePayload, PLATFORM_MESSAGE, TITLE_MESSAGE, TITLE_MIN_CHARS, ValidationIssue,
};
use serde_json::{Value, json};

use crate::error::ApiError;

pub const BODY_NOT_OBJECT: &str = "request body must be a JSON object";
pub const BODY_NOT_JSON: &str = "content-type must be application/json";
pub const BODY_UNREADABLE: &str = "request body could not be read";

/// A string field that must hold at least `min_chars` characters.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    path: &'static [&'static str],
    min_chars: usize,
    message: &'static str,
}

impl FieldRule {
    pub const fn string(
        path: &'static [&'static str],
        min_chars: usize,
        message: &'static str,
    ) -> Self {
        Self {
            path,
            min_chars,
            message,
        }
    }

    fn check(&self, request: &Value) -> Option<ValidationIssue> {
        let value = self
            .path
            .iter()
            .try_fold(request, |value, segment| value.get(*segment));

        match value.and_then(Value::as_str) {
            Some(text) if text.chars().count() >= self.min_chars => None,
            _ => Some(ValidationIssue::new(self.path.join("."), self.message)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequestSchema {
    rules: &'static [FieldRule],
}

impl RequestSchema {
    pub const fn new(rules: &'static [FieldRule]) -> Self {
        Self { rules }
    }

    /// Checks every rule; issues come back in declaration order.
    pub fn check(&self, request: &Value) -> Result<(), Vec<ValidationIssue>> {
        let issues: Vec<ValidationIssue> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(request))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

/// Shared by create and update.
pub static GAME_SCHEMA: RequestSchema = RequestSchema::new(&[
    FieldRule::string(&["body", "title"], TITLE_MIN_CHARS, TITLE_MESSAGE),
    FieldRule::string(&["body", "platform"], 1, PLATFORM_MESSAGE),
]);

/// Body extractor for game writes. Rejects with a validation error before
/// the handler runs.
#[derive(Debug)]
pub struct ValidatedGame(pub GamePayload);

impl<S> FromRequest<S> for ValidatedGame
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();
        let query = Query::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Query(query)| query)
            .unwrap_or_default();

        let Json(body) = Json::<Value>::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(body_rejection)?;
        if !body.is_object() {
            return Err(body_issue(BODY_NOT_OBJECT));
        }

        let description = json!({
            "body": body,
            "params": params,
            "query": query,
        });
        GAME_SCHEMA.check(&description).map_err(ApiError::Validation)?;

        // The schema has already established both fields as strings.
        let payload = serde_json::from_value(body).map_err(|_| body_issue(BODY_NOT_OBJECT))?;
        Ok(Self(payload))
    }
}

fn body_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => body_issue(BODY_NOT_JSON),
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            body_issue(BODY_NOT_OBJECT)
        }
        // Oversized or interrupted bodies.
        _ => body_issue(BODY_UNREADABLE),
    }
}

fn body_issue(message: &str) -> ApiError {
    ApiError::Validation(vec![ValidationIssue::new("body", message)])
}
