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

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MESSAGE: &str = "title must be at least 3 characters";
pub const PLATFORM_MESSAGE: &str = "platform is required";

pub const VALIDATION_ERROR: &str = "invalid input";
pub const NOT_FOUND_ERROR: &str = "game not found";
pub const INTERNAL_ERROR: &str = "internal server error";

pub type GameId = i32;

/// A persisted game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Game {
    /// Store-assigned identifier, immutable after creation.
    #[schema(value_type = i32, example = 1)]
    pub id: GameId,
    #[schema(example = "The Witcher 3")]
    pub title: String,
    #[schema(example = "PC")]
    pub platform: String,
}

/// Body accepted by create and update. Update replaces both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GamePayload {
    #[schema(min_length = 3, example = "The Witcher 3")]
    pub title: String,
    #[schema(min_length = 1, example = "PC")]
    pub platform: String,
}

impl GamePayload {
    pub fn into_game(self, id: GameId) -> Game {
        Game {
            id,
            title: self.title,
            platform: self.platform,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    /// Dot-joined path of the offending field, e.g. `body.title`.
    #[schema(example = "body.platform")]
    pub field: String,
    #[schema(example = "platform is required")]
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "game not found")]
    pub error: String,
    /// Present only on validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssue>>,
}

impl ErrorBody {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            issues: None,
        }
    }

    pub fn invalid(issues: Vec<ValidationIssue>) -> Self {
        Self {
            error: VALIDATION_ERROR.to_string(),
            issues: Some(issues),
        }
    }
}
