//! App settings storage
//!
//! Settings are stored as key-value pairs with JSON-serialized values for
//! flexibility. The two playback keys used by the queue manager get typed
//! accessors; everything else goes through the generic get/set pair.

use crate::StorageError;
use sqlx::{Row, SqlitePool};
use verse_core::RepeatMode;

type Result<T> = std::result::Result<T, StorageError>;

// Setting key constants
/// Whether shuffle playback is enabled
pub const SETTING_SHUFFLE_ENABLED: &str = "playback.shuffle_enabled";

/// Repeat mode ("off", "all", "one")
pub const SETTING_REPEAT_MODE: &str = "playback.repeat_mode";

/// Get a single setting value
///
/// Returns `Ok(None)` if the setting has never been written.
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<serde_json::Value>> {
    let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let value: serde_json::Value = serde_json::from_str(&row.get::<String, _>("value"))
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Set a setting value
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &serde_json::Value) -> Result<()> {
    let value_str =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO settings (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value_str)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a setting
///
/// Returns `Ok(true)` if a setting was deleted, `Ok(false)` if none existed.
pub async fn delete_setting(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Whether shuffle is enabled (defaults to `false` when unset)
pub async fn shuffle_enabled(pool: &SqlitePool) -> Result<bool> {
    let value = get_setting(pool, SETTING_SHUFFLE_ENABLED).await?;
    Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
}

/// Persist the shuffle flag
pub async fn set_shuffle_enabled(pool: &SqlitePool, enabled: bool) -> Result<()> {
    set_setting(pool, SETTING_SHUFFLE_ENABLED, &serde_json::json!(enabled)).await
}

/// Current repeat mode (defaults to `Off` when unset or unparseable)
pub async fn repeat_mode(pool: &SqlitePool) -> Result<RepeatMode> {
    let value = get_setting(pool, SETTING_REPEAT_MODE).await?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(RepeatMode::from_str)
        .unwrap_or(RepeatMode::Off))
}

/// Persist the repeat mode
pub async fn set_repeat_mode(pool: &SqlitePool, mode: RepeatMode) -> Result<()> {
    set_setting(pool, SETTING_REPEAT_MODE, &serde_json::json!(mode.as_str())).await
}
