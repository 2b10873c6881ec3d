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

mod app;
mod config;
mod docs;
mod entity;
mod error;
mod handlers;
mod store;
mod validation;

use std::sync::Arc;

use anyhow::Context;
use lambda_http::run as lambda_run;
use tracing::info;

use crate::{
    app::{AppState, build_router},
    config::ServiceConfig,
    store::{GameStore, InMemoryGameStore, SqlGameStore},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "games_service=debug,tower_http=info".to_string()),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let store = open_store(&config).await?;
    let app = build_router(AppState::new(store));

    if config.lambda {
        info!("AWS Lambda runtime detected; running games-service in lambda mode");
        lambda_run(app)
            .await
            .map_err(|e| anyhow::Error::msg(format!("lambda runtime error: {e}")))?;
        return Ok(());
    }

    info!(bind_addr = %config.bind_addr, "games-service listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn open_store(config: &ServiceConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    let Some(url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; using in-memory game store");
        return Ok(Arc::new(InMemoryGameStore::default()));
    };

    let store = SqlGameStore::connect(url)
        .await
        .context("failed to connect to game database")?;
    if config.create_schema {
        store
            .ensure_schema()
            .await
            .context("failed to create games table")?;
        info!("games table ready");
    }
    Ok(Arc::new(store))
}
