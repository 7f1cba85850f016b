//! Trait adapters over the `SQLite` slices
//!
//! Thin wrappers implementing the `verse-core` store seams so the playback
//! engine can be wired to this crate without seeing any SQL.

use crate::{queue, settings, tracks};
use async_trait::async_trait;
use sqlx::SqlitePool;
use verse_core::{
    EntryId, PlayerError, QueueEntry, QueueStore, RepeatMode, SettingsStore, Track, TrackId,
    TrackStore,
};

type Result<T> = std::result::Result<T, PlayerError>;

/// `TrackStore` backed by the `tracks` table
#[derive(Clone)]
pub struct SqliteTrackStore {
    pool: SqlitePool,
}

impl SqliteTrackStore {
    /// Create an adapter over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackStore for SqliteTrackStore {
    async fn track(&self, id: TrackId) -> Result<Option<Track>> {
        Ok(tracks::get_by_id(&self.pool, id).await?)
    }
}

/// `SettingsStore` backed by the `settings` table
#[derive(Clone)]
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    /// Create an adapter over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn shuffle_enabled(&self) -> Result<bool> {
        Ok(settings::shuffle_enabled(&self.pool).await?)
    }

    async fn set_shuffle_enabled(&self, enabled: bool) -> Result<()> {
        Ok(settings::set_shuffle_enabled(&self.pool, enabled).await?)
    }

    async fn repeat_mode(&self) -> Result<RepeatMode> {
        Ok(settings::repeat_mode(&self.pool).await?)
    }

    async fn set_repeat_mode(&self, mode: RepeatMode) -> Result<()> {
        Ok(settings::set_repeat_mode(&self.pool, mode).await?)
    }
}

/// `QueueStore` backed by the `queue_entries` table
#[derive(Clone)]
pub struct SqliteQueueStore {
    pool: SqlitePool,
}

impl SqliteQueueStore {
    /// Create an adapter over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueueStore for SqliteQueueStore {
    async fn save_snapshot(&self, entries: &[QueueEntry]) -> Result<Vec<EntryId>> {
        Ok(queue::save_snapshot(&self.pool, entries).await?)
    }

    async fn load_snapshot(&self) -> Result<Vec<QueueEntry>> {
        Ok(queue::load_snapshot(&self.pool).await?)
    }

    async fn update_offset(&self, id: EntryId, offset_ms: i64) -> Result<()> {
        Ok(queue::update_offset(&self.pool, id, offset_ms).await?)
    }

    async fn clear(&self) -> Result<()> {
        Ok(queue::clear(&self.pool).await?)
    }
}
