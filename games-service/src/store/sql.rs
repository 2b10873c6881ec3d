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

use std::time::Duration;

use async_trait::async_trait;
use games_common::{Game, GameId, GamePayload};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Schema, SqlErr,
};
use tracing::debug;

use super::{GameStore, StoreError};
use crate::entity::games;

/// Relational backend over a SeaORM connection.
pub struct SqlGameStore {
    db: DatabaseConnection,
}

impl SqlGameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);
        // A single connection keeps `sqlite::memory:` databases alive and
        // serializes writers on file databases.
        if url.starts_with("sqlite:") {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await?;
        debug!(backend = ?db.get_database_backend(), "connected to game database");
        Ok(Self::new(db))
    }

    /// Creates the `games` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let backend = self.db.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(games::Entity);
        statement.if_not_exists();
        self.db.execute(backend.build(&statement)).await?;
        Ok(())
    }
}

#[async_trait]
impl GameStore for SqlGameStore {
    async fn find_all(&self) -> Result<Vec<Game>, StoreError> {
        let rows = games::Entity::find()
            .order_by_asc(games::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_by_id(&self, id: GameId) -> Result<Game, StoreError> {
        games::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Game::from)
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, payload: GamePayload) -> Result<Game, StoreError> {
        let model = games::ActiveModel {
            id: NotSet,
            title: Set(payload.title),
            platform: Set(payload.platform),
        }
        .insert(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn update_by_id(&self, id: GameId, payload: GamePayload) -> Result<Game, StoreError> {
        let model = games::ActiveModel {
            id: Set(id),
            title: Set(payload.title),
            platform: Set(payload.platform),
        }
        .update(&self.db)
        .await?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: GameId) -> Result<(), StoreError> {
        let result = games::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

impl From<DbErr> for StoreError {
    fn from(error: DbErr) -> Self {
        match error {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreError::NotFound,
            other => match other.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail))
                | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    StoreError::ConstraintViolation(detail)
                }
                _ => StoreError::Unknown(other.to_string()),
            },
        }
    }
}
