//! Store seams for the playback engine
//!
//! These traits abstract the three external collaborators of the queue
//! manager so it can run against SQLite in the app and against in-memory
//! fakes in tests.

use crate::error::Result;
use crate::types::{EntryId, QueueEntry, RepeatMode, Track, TrackId};
use async_trait::async_trait;

/// Read-only lookup of library tracks by identifier
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Look up a track by id
    ///
    /// Returns `Ok(None)` when the track no longer exists; a queue entry
    /// referencing it is then a dangling reference, which callers are
    /// expected to skip.
    async fn track(&self, id: TrackId) -> Result<Option<Track>>;
}

/// Durable storage for the two playback settings
///
/// One typed accessor pair per setting; there is deliberately no
/// string-keyed dynamic surface.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Whether shuffle is enabled
    async fn shuffle_enabled(&self) -> Result<bool>;

    /// Persist the shuffle flag
    async fn set_shuffle_enabled(&self, enabled: bool) -> Result<()>;

    /// Current repeat mode
    async fn repeat_mode(&self) -> Result<RepeatMode>;

    /// Persist the repeat mode
    async fn set_repeat_mode(&self, mode: RepeatMode) -> Result<()>;
}

/// Durable storage for the play-queue snapshot
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Replace the stored snapshot with `entries`, atomically from the
    /// caller's point of view
    ///
    /// Entries that already carry an id keep it; unset ids are allocated by
    /// the store. Returns the ids of all entries in list order so the
    /// caller can sync its in-memory copies.
    async fn save_snapshot(&self, entries: &[QueueEntry]) -> Result<Vec<EntryId>>;

    /// Load the stored snapshot, ordered by the stored `position` field
    async fn load_snapshot(&self) -> Result<Vec<QueueEntry>>;

    /// Update the resume offset of a single stored entry
    async fn update_offset(&self, id: EntryId, offset_ms: i64) -> Result<()>;

    /// Delete the stored snapshot
    async fn clear(&self) -> Result<()>;
}
