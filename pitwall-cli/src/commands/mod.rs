//! Subcommand implementations

pub mod migrate;
pub mod run;
pub mod seed;

use anyhow::{Context, Result};
use pitwall_core::PitwallConfig;
use pitwall_server::db::{self, migrations, PgPool};
use tracing::info;

/// Config files, then environment, then the `--database-url` flag.
pub fn resolve_config(database_url: Option<String>) -> PitwallConfig {
    let mut config = PitwallConfig::load();
    config.apply_env();
    if let Some(url) = database_url {
        config.database.url = url;
    }
    config
}

/// Open the pool without touching the schema.
pub async fn connect(config: &PitwallConfig) -> Result<PgPool> {
    info!(
        max_connections = config.database.max_connections,
        "Connecting to database"
    );
    db::create_pool_from_config(&config.database)
        .await
        .context("Failed to create database pool")
}

/// Open the pool and bring the schema to the latest version.
pub async fn connect_and_migrate(config: &PitwallConfig) -> Result<PgPool> {
    let pool = connect(config).await?;
    migrations::run(&pool)
        .await
        .context("Failed to apply migrations")?;
    Ok(pool)
}
