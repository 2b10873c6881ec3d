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

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, bail};

pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Relational store URL. `None` selects the in-process store.
    pub database_url: Option<String>,
    pub create_schema: bool,
    pub lambda: bool,
}

impl ServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let host = var("GAMES_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("invalid GAMES_SERVICE_HOST {host:?}"))?;

        let create_schema = match var("DATABASE_CREATE_SCHEMA") {
            Some(raw) => parse_flag(&raw).context("invalid DATABASE_CREATE_SCHEMA")?,
            None => false,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            database_url: var("DATABASE_URL"),
            create_schema,
            lambda: var("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
