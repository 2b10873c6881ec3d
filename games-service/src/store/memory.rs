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

use std::collections::BTreeMap;

use async_trait::async_trait;
use games_common::{Game, GameId, GamePayload};
use tokio::sync::RwLock;

use super::{GameStore, StoreError};

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryGameStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    // Ids are never handed out twice, even after deletes.
    last_id: GameId,
    games: BTreeMap<GameId, Game>,
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.games.values().cloned().collect())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Game, StoreError> {
        let inner = self.inner.read().await;
        inner.games.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, payload: GamePayload) -> Result<Game, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unknown("game id space exhausted".to_string()))?;
        inner.last_id = id;

        let game = payload.into_game(id);
        inner.games.insert(id, game.clone());
        Ok(game)
    }

    async fn update_by_id(&self, id: GameId, payload: GamePayload) -> Result<Game, StoreError> {
        let mut inner = self.inner.write().await;
        let game = inner.games.get_mut(&id).ok_or(StoreError::NotFound)?;
        game.title = payload.title;
        game.platform = payload.platform;
        Ok(game.clone())
    }

    async fn delete_by_id(&self, id: GameId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .games
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
