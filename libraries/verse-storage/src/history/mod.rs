//! Play history storage

use crate::tracks;
use crate::StorageError;
use chrono::Utc;
use sqlx::SqlitePool;
use verse_core::{Track, TrackId};

type Result<T> = std::result::Result<T, StorageError>;

/// Record a play of a track
///
/// Appends a history row and bumps the track's play count and last-played
/// timestamp in one transaction. `completed` distinguishes a full listen
/// from a skip.
pub async fn record(pool: &SqlitePool, track_id: TrackId, completed: bool) -> Result<()> {
    let now = Utc::now().timestamp();
    let completed = i64::from(completed);

    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO play_history (track_id, played_at, completed) VALUES (?, ?, ?)")
        .bind(track_id)
        .bind(now)
        .bind(completed)
        .execute(&mut *tx)
        .await?;

    sqlx::query("UPDATE tracks SET play_count = play_count + 1, last_played_at = ? WHERE id = ?")
        .bind(now)
        .bind(track_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}

/// Get recently played tracks, most recent first
///
/// Tracks deleted from the library since they were played are omitted.
pub async fn recently_played(pool: &SqlitePool, limit: i64) -> Result<Vec<Track>> {
    let rows = sqlx::query_scalar::<_, i64>(
        "SELECT track_id FROM play_history GROUP BY track_id ORDER BY MAX(played_at) DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let mut played = Vec::with_capacity(rows.len());
    for track_id in rows {
        if let Some(track) = tracks::get_by_id(pool, TrackId::new(track_id)).await? {
            played.push(track);
        }
    }

    Ok(played)
}
