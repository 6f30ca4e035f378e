use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Key-value table standing in for browser local storage. One row per slot.
const CREATE_KV_STORE: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
)";

/// Opens (creating if needed) the local SQLite database and ensures the slot table exists.
///
/// A single connection is used: there is exactly one writer, and `sqlite::memory:`
/// databases are per-connection.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening local store at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_KV_STORE).execute(&pool).await?;

    info!("Local store ready");
    Ok(pool)
}
