//! Track library storage
//!
//! Cached song metadata so files are not re-scanned on every launch.

use crate::StorageError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::path::PathBuf;
use verse_core::{Track, TrackId};

type Result<T> = std::result::Result<T, StorageError>;

fn track_from_row(row: &SqliteRow) -> Result<Track> {
    Ok(Track {
        id: row.get("id"),
        file_path: PathBuf::from(row.get::<String, _>("file_path")),
        title: row.get("title"),
        artist: row.get("artist"),
        album: row.get("album"),
        genre: row.get("genre"),
        year: row.get::<Option<i64>, _>("year").map(|n| n as u32),
        track_number: row.get::<Option<i64>, _>("track_number").map(|n| n as u32),
        duration_ms: row.get::<Option<i64>, _>("duration_ms").map(|n| n as u64),
        file_size: row.get::<Option<i64>, _>("file_size").map(|n| n as u64),
        play_count: row.get::<i64, _>("play_count") as u32,
        last_played_at: row
            .get::<Option<i64>, _>("last_played_at")
            .and_then(|t| DateTime::from_timestamp(t, 0)),
        added_at: DateTime::from_timestamp(row.get::<i64, _>("added_at"), 0)
            .ok_or_else(|| StorageError::Query("Invalid timestamp".to_string()))?,
    })
}

const TRACK_COLUMNS: &str = "id, file_path, title, artist, album, genre, year, track_number, \
                             duration_ms, file_size, play_count, last_played_at, added_at";

/// Insert a track into the library, returning the assigned id
pub async fn insert(pool: &SqlitePool, track: &Track) -> Result<TrackId> {
    let result = sqlx::query(
        "INSERT INTO tracks (file_path, title, artist, album, genre, year, track_number,
                             duration_ms, file_size, play_count, last_played_at, added_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(track.file_path.to_string_lossy().to_string())
    .bind(&track.title)
    .bind(&track.artist)
    .bind(&track.album)
    .bind(&track.genre)
    .bind(track.year.map(i64::from))
    .bind(track.track_number.map(i64::from))
    .bind(track.duration_ms.map(|d| d as i64))
    .bind(track.file_size.map(|s| s as i64))
    .bind(i64::from(track.play_count))
    .bind(track.last_played_at.map(|t| t.timestamp()))
    .bind(track.added_at.timestamp())
    .execute(pool)
    .await?;

    Ok(TrackId::new(result.last_insert_rowid()))
}

/// Get a track by id
pub async fn get_by_id(pool: &SqlitePool, id: TrackId) -> Result<Option<Track>> {
    let row = sqlx::query(&format!("SELECT {TRACK_COLUMNS} FROM tracks WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(track_from_row).transpose()
}

/// Get a track by file path
pub async fn get_by_path(pool: &SqlitePool, file_path: &str) -> Result<Option<Track>> {
    let row = sqlx::query(&format!(
        "SELECT {TRACK_COLUMNS} FROM tracks WHERE file_path = ?"
    ))
    .bind(file_path)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(track_from_row).transpose()
}

/// Get all library tracks ordered by title
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query(&format!("SELECT {TRACK_COLUMNS} FROM tracks ORDER BY title"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(track_from_row).collect()
}

/// Delete a track from the library
///
/// Queue entries referencing the track are left in place; navigation skips
/// them as dangling references.
pub async fn delete(pool: &SqlitePool, id: TrackId) -> Result<()> {
    let result = sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("Track", id.to_string()));
    }

    Ok(())
}

/// Bump the play count and last-played timestamp of a track
pub async fn record_play(pool: &SqlitePool, id: TrackId) -> Result<()> {
    let now = Utc::now().timestamp();

    sqlx::query("UPDATE tracks SET play_count = play_count + 1, last_played_at = ? WHERE id = ?")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
