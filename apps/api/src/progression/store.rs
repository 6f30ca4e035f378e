//! Persistence of the single `UserState` slot.
//!
//! The slot is one row of the `kv_store` table holding the JSON-serialized state.
//! Reads happen once at startup; every accepted change overwrites the row.
//! There is no versioning: a blob that no longer decodes is a startup error.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::progression::models::UserState;

/// Fixed key the progression blob is stored under.
pub const USER_STATE_KEY: &str = "techcomm-user";

#[derive(Clone)]
pub struct ProgressStore {
    pool: SqlitePool,
}

impl ProgressStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Loads the persisted state, or the default state when the slot is empty.
    pub async fn load(&self) -> Result<UserState> {
        let saved: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(USER_STATE_KEY)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to read progress slot")?;

        match saved {
            Some(blob) => {
                let state: UserState = serde_json::from_str(&blob)
                    .with_context(|| format!("Failed to parse stored '{USER_STATE_KEY}' state"))?;
                info!(
                    "Loaded progress: level={}, xp={}, history={}",
                    state.level,
                    state.xp,
                    state.history.len()
                );
                Ok(state)
            }
            None => {
                info!("No saved progress; starting at level 1");
                Ok(UserState::default())
            }
        }
    }

    /// Overwrites the slot with `state`.
    pub async fn save(&self, state: &UserState) -> Result<()> {
        let blob = serde_json::to_string(state).context("Failed to serialize progress")?;

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(USER_STATE_KEY)
        .bind(&blob)
        .execute(&self.pool)
        .await
        .context("Failed to write progress slot")?;

        debug!("Saved progress ({} bytes)", blob.len());
        Ok(())
    }
}
