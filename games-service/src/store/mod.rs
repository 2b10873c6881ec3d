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

//! Persistence seam for game records.
//!
//! Handlers only see [`GameStore`]; the concrete backend is picked at startup
//! and injected through the router state.

mod memory;
mod sql;

use async_trait::async_trait;
use games_common::{Game, GameId, GamePayload};

pub use memory::InMemoryGameStore;
pub use sql::SqlGameStore;

/// Outcome tag for a failed store call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record matches the requested id.
    #[error("game not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("store failure: {0}")]
    Unknown(String),
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// All games in ascending id order.
    async fn find_all(&self) -> Result<Vec<Game>, StoreError>;

    async fn find_by_id(&self, id: GameId) -> Result<Game, StoreError>;

    /// Persists a new game; the store assigns the id.
    async fn create(&self, payload: GamePayload) -> Result<Game, StoreError>;

    /// Replaces title and platform of an existing game.
    async fn update_by_id(&self, id: GameId, payload: GamePayload) -> Result<Game, StoreError>;

    async fn delete_by_id(&self, id: GameId) -> Result<(), StoreError>;
}
