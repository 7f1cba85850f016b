//! Play-queue entry type

use crate::types::{EntryId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One slot in the ordered play queue
///
/// Entries reference tracks by id and are never validated eagerly: the
/// referenced track may be deleted from the library while still queued, in
/// which case navigation skips the entry.
///
/// Invariants maintained by the queue manager:
/// - `position` values across a queue of length N are exactly `{0..N-1}`
/// - at most one entry has `is_current` set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Persistent identifier, assigned by the persistence layer on first
    /// save; `None` for entries that have never been saved
    pub id: Option<EntryId>,

    /// The queued track
    pub track_id: TrackId,

    /// Zero-based rank in the queue
    pub position: i64,

    /// Whether this entry is the one loaded for playback
    pub is_current: bool,

    /// Resume offset in milliseconds; meaningful on the current entry only
    pub current_offset_ms: i64,

    /// When the entry was added to the queue (informational)
    pub added_at: DateTime<Utc>,
}

impl QueueEntry {
    /// Create a new, not-yet-persisted entry for a track
    pub fn new(track_id: TrackId) -> Self {
        Self {
            id: None,
            track_id,
            position: 0,
            is_current: false,
            current_offset_ms: 0,
            added_at: Utc::now(),
        }
    }
}
