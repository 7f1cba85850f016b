//! Play-queue snapshot storage
//!
//! The queue manager owns the in-memory queue; this module owns the durable
//! mirror. A save replaces the whole stored snapshot in one transaction so a
//! concurrent reader never observes a partially written queue.

use crate::StorageError;
use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use verse_core::{EntryId, QueueEntry};

type Result<T> = std::result::Result<T, StorageError>;

fn entry_from_row(row: &SqliteRow) -> Result<QueueEntry> {
    Ok(QueueEntry {
        id: Some(row.get("id")),
        track_id: row.get("track_id"),
        position: row.get("position"),
        is_current: row.get::<i64, _>("is_current") != 0,
        current_offset_ms: row.get("current_offset_ms"),
        added_at: DateTime::from_timestamp(row.get::<i64, _>("added_at"), 0)
            .ok_or_else(|| StorageError::Query("Invalid timestamp".to_string()))?,
    })
}

/// Replace the stored snapshot with `entries`
///
/// Runs as a single transaction: delete everything, reinsert in list order.
/// Entries that already carry an id keep it across saves; unset ids are
/// allocated by `SQLite`. Returns the ids of all entries in list order.
pub async fn save_snapshot(pool: &SqlitePool, entries: &[QueueEntry]) -> Result<Vec<EntryId>> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM queue_entries")
        .execute(&mut *tx)
        .await?;

    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let is_current = i64::from(entry.is_current);
        let result = sqlx::query(
            "INSERT INTO queue_entries (id, track_id, position, is_current, current_offset_ms, added_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(entry.id)
        .bind(entry.track_id)
        .bind(entry.position)
        .bind(is_current)
        .bind(entry.current_offset_ms)
        .bind(entry.added_at.timestamp())
        .execute(&mut *tx)
        .await?;

        ids.push(
            entry
                .id
                .unwrap_or_else(|| EntryId::new(result.last_insert_rowid())),
        );
    }

    tx.commit().await?;

    Ok(ids)
}

/// Load the stored snapshot ordered by position
pub async fn load_snapshot(pool: &SqlitePool) -> Result<Vec<QueueEntry>> {
    let rows = sqlx::query(
        "SELECT id, track_id, position, is_current, current_offset_ms, added_at
         FROM queue_entries ORDER BY position",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(entry_from_row).collect()
}

/// Get the entry flagged as current, if any
pub async fn current_entry(pool: &SqlitePool) -> Result<Option<QueueEntry>> {
    let row = sqlx::query(
        "SELECT id, track_id, position, is_current, current_offset_ms, added_at
         FROM queue_entries WHERE is_current = 1 LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(entry_from_row).transpose()
}

/// Update the resume offset of a single stored entry
pub async fn update_offset(pool: &SqlitePool, id: EntryId, offset_ms: i64) -> Result<()> {
    sqlx::query("UPDATE queue_entries SET current_offset_ms = ? WHERE id = ?")
        .bind(offset_ms)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete the stored snapshot
pub async fn clear(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM queue_entries").execute(pool).await?;

    Ok(())
}
