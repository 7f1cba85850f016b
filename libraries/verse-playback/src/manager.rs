//! Queue manager - the play-queue and playback-session state machine
//!
//! Owns the in-memory ordered queue and the current-position cursor, and
//! decides what plays next or previous under the shuffle and repeat
//! policies. Every mutation renumbers positions and mirrors the queue to
//! the persistence seam; a failed save keeps the in-memory state
//! authoritative so the session continues in memory-only mode.
//!
//! The manager performs no internal locking: it is designed for a single
//! logical caller (playback orchestration and UI commands funnelled through
//! one owner), which the host is responsible for serializing.

use crate::error::{PlaybackError, Result};
use crate::settings::SettingsCache;
use crate::shuffle::shuffle_keeping_anchor;
use std::sync::Arc;
use tracing::{debug, warn};
use verse_core::{
    EntryId, QueueEntry, QueueStore, RepeatMode, SettingsStore, Track, TrackId, TrackStore,
};

/// Scan direction for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Play-queue and playback-session state machine
///
/// Constructed empty; call [`QueueManager::restore`] at startup to load the
/// persisted snapshot.
pub struct QueueManager {
    track_store: Arc<dyn TrackStore>,
    settings: SettingsCache,
    queue_store: Arc<dyn QueueStore>,

    /// Ordered queue; `position` fields are kept contiguous `0..N-1`
    entries: Vec<QueueEntry>,

    /// Index of the current entry, `None` when nothing is current
    current_index: Option<usize>,
}

impl QueueManager {
    /// Create a manager over the three store seams
    pub fn new(
        track_store: Arc<dyn TrackStore>,
        settings_store: Arc<dyn SettingsStore>,
        queue_store: Arc<dyn QueueStore>,
    ) -> Self {
        Self {
            track_store,
            settings: SettingsCache::new(settings_store),
            queue_store,
            entries: Vec::new(),
            current_index: None,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The queue entries in order
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Whether shuffle is enabled
    pub async fn shuffle_enabled(&self) -> Result<bool> {
        self.settings.shuffle_enabled().await
    }

    /// Current repeat mode
    pub async fn repeat_mode(&self) -> Result<RepeatMode> {
        self.settings.repeat_mode().await
    }

    /// The queue resolved to library tracks, in order
    ///
    /// Entries whose track has been deleted from the library are silently
    /// skipped.
    pub async fn queued_tracks(&self) -> Result<Vec<Track>> {
        let mut tracks = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if let Some(track) = self.lookup(entry.track_id).await? {
                tracks.push(track);
            }
        }
        Ok(tracks)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// The track of the current entry
    ///
    /// `None` when there is no current entry or its track no longer
    /// resolves in the library.
    pub async fn current(&self) -> Result<Option<Track>> {
        match self.current_index {
            Some(index) => self.resolve(index).await,
            None => Ok(None),
        }
    }

    /// The track that would play next, without moving the cursor
    pub async fn peek_next(&self) -> Result<Option<Track>> {
        Ok(self
            .peek_indexed(Direction::Forward)
            .await?
            .map(|(_, track)| track))
    }

    /// The track that would play on "previous", without moving the cursor
    pub async fn peek_previous(&self) -> Result<Option<Track>> {
        Ok(self
            .peek_indexed(Direction::Backward)
            .await?
            .map(|(_, track)| track))
    }

    /// Move the cursor to the next track and persist the snapshot
    ///
    /// Resolves like [`QueueManager::peek_next`]; when nothing resolves
    /// (end of queue without repeat, empty queue, every entry dangling) the
    /// cursor is left untouched and `Ok(None)` is returned - stopping is
    /// the orchestrator's job.
    pub async fn advance(&mut self) -> Result<Option<Track>> {
        let Some((index, track)) = self.peek_indexed(Direction::Forward).await? else {
            debug!("advance: nothing to play");
            return Ok(None);
        };

        self.current_index = Some(index);
        self.mark_current();
        self.persist().await?;

        Ok(Some(track))
    }

    /// Move the cursor to the previous track and persist the snapshot
    pub async fn retreat(&mut self) -> Result<Option<Track>> {
        let Some((index, track)) = self.peek_indexed(Direction::Backward).await? else {
            debug!("retreat: nothing to play");
            return Ok(None);
        };

        self.current_index = Some(index);
        self.mark_current();
        self.persist().await?;

        Ok(Some(track))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a track to the end of the queue
    pub async fn enqueue_tail(&mut self, track_id: TrackId) -> Result<()> {
        debug!("enqueue tail: track {}", track_id);

        self.entries.push(QueueEntry::new(track_id));
        self.renumber();
        self.persist().await
    }

    /// Insert a track immediately after the current entry
    ///
    /// With no current entry the track goes to the head of the queue.
    pub async fn enqueue_next(&mut self, track_id: TrackId) -> Result<()> {
        debug!("enqueue next: track {}", track_id);

        let index = match self.current_index {
            Some(current) => current + 1,
            None => 0,
        };
        self.entries.insert(index, QueueEntry::new(track_id));
        self.renumber();
        self.persist().await
    }

    /// Remove the entry with the given id
    ///
    /// Unknown ids are a no-op. Removing the current entry leaves the
    /// cursor unset until the next navigation call; a cursor after the
    /// removed slot shifts left so it stays on the same entry.
    pub async fn remove(&mut self, entry_id: EntryId) -> Result<()> {
        let Some(index) = self.entries.iter().position(|e| e.id == Some(entry_id)) else {
            return Ok(());
        };

        debug!("remove: entry {} at index {}", entry_id, index);

        self.entries.remove(index);
        self.current_index = match self.current_index {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        self.renumber();
        self.persist().await
    }

    /// Move the entry at `from` to `to`
    ///
    /// Out-of-range indices are silently ignored: UI drag gestures can race
    /// concurrent removals, and a stale drop must not error. The cursor is
    /// recomputed so it still refers to the same entry it pointed at before
    /// the move, whether the moved entry was the current one or shifted
    /// around it.
    pub async fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.entries.len();
        if from >= len || to >= len {
            return Ok(());
        }
        if from == to {
            return Ok(());
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);

        self.current_index = self.current_index.map(|current| {
            if current == from {
                to
            } else if from < current && to >= current {
                current - 1
            } else if from > current && to <= current {
                current + 1
            } else {
                current
            }
        });
        self.renumber();
        self.persist().await
    }

    /// Empty the queue and clear the persisted snapshot
    pub async fn clear(&mut self) -> Result<()> {
        debug!("clear queue");

        self.entries.clear();
        self.current_index = None;

        self.queue_store.clear().await.map_err(|e| {
            warn!("queue clear failed; continuing in memory-only mode: {}", e);
            PlaybackError::Persistence(e)
        })
    }

    /// Persist the shuffle flag, randomizing the queue on enable
    ///
    /// On the off-to-on transition with more than one entry, the current
    /// entry stays anchored at its index and the rest are permuted
    /// uniformly, so what is playing never changes. Turning shuffle off
    /// does not restore the original order (none is retained); it only
    /// changes future navigation policy.
    pub async fn set_shuffle(&mut self, enabled: bool) -> Result<()> {
        let was_enabled = self.settings.shuffle_enabled().await?;
        self.settings.set_shuffle_enabled(enabled).await?;

        if enabled && !was_enabled && self.entries.len() > 1 {
            shuffle_keeping_anchor(&mut self.entries, self.current_index);
            self.renumber();
            self.persist().await?;
        }

        Ok(())
    }

    /// Persist the repeat mode; the queue order is untouched
    pub async fn set_repeat_mode(&mut self, mode: RepeatMode) -> Result<()> {
        self.settings.set_repeat_mode(mode).await
    }

    /// Record the playback offset of the current entry for resume
    ///
    /// No-op when nothing is current. Persisted in place when the entry has
    /// been saved before; otherwise the offset rides along with the next
    /// snapshot save.
    pub async fn set_playback_position(&mut self, offset_ms: i64) -> Result<()> {
        let Some(index) = self.current_index else {
            return Ok(());
        };
        let Some(entry) = self.entries.get_mut(index) else {
            return Ok(());
        };

        entry.current_offset_ms = offset_ms;

        if let Some(id) = entry.id {
            self.queue_store
                .update_offset(id, offset_ms)
                .await
                .map_err(|e| {
                    warn!("offset update failed for entry {}: {}", id, e);
                    PlaybackError::Persistence(e)
                })?;
        }
        Ok(())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Write the full queue snapshot to the persistence seam
    pub async fn save(&mut self) -> Result<()> {
        self.persist().await
    }

    /// Replace the in-memory queue with the persisted snapshot
    ///
    /// The cursor is set to the entry flagged as current; when none is
    /// flagged the manager behaves as a freshly cleared queue until the
    /// next enqueue or navigation call.
    pub async fn restore(&mut self) -> Result<()> {
        let entries = self.queue_store.load_snapshot().await.map_err(|e| {
            warn!("queue restore failed: {}", e);
            PlaybackError::Persistence(e)
        })?;

        self.current_index = entries.iter().position(|e| e.is_current);
        self.entries = entries;

        debug!(
            "restored queue: {} entries, current index {:?}",
            self.entries.len(),
            self.current_index
        );
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Rewrite `position` fields to `0..N-1` in list order
    fn renumber(&mut self) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.position = index as i64;
        }
    }

    /// Rewrite `is_current` flags to match the cursor
    fn mark_current(&mut self) {
        for entry in &mut self.entries {
            entry.is_current = false;
        }
        if let Some(index) = self.current_index {
            if let Some(entry) = self.entries.get_mut(index) {
                entry.is_current = true;
            }
        }
    }

    /// Save the snapshot and sync assigned ids back onto the entries
    ///
    /// A failed save is logged and surfaced, but the in-memory mutation it
    /// was mirroring stands: memory stays authoritative for the session.
    async fn persist(&mut self) -> Result<()> {
        match self.queue_store.save_snapshot(&self.entries).await {
            Ok(ids) => {
                for (entry, id) in self.entries.iter_mut().zip(ids) {
                    entry.id = Some(id);
                }
                Ok(())
            }
            Err(e) => {
                warn!("queue save failed; continuing in memory-only mode: {}", e);
                Err(PlaybackError::Persistence(e))
            }
        }
    }

    async fn lookup(&self, track_id: TrackId) -> Result<Option<Track>> {
        self.track_store
            .track(track_id)
            .await
            .map_err(PlaybackError::TrackStore)
    }

    /// Resolve the entry at `index` to its library track
    async fn resolve(&self, index: usize) -> Result<Option<Track>> {
        match self.entries.get(index) {
            Some(entry) => self.lookup(entry.track_id).await,
            None => Ok(None),
        }
    }

    /// Resolve the next or previous playable entry without moving the cursor
    ///
    /// Repeat policy: `One` pins to the current entry, `All` wraps at the
    /// queue boundary, `Off` terminates there. Entries whose track no
    /// longer resolves are skipped in the scan direction, each entry
    /// visited at most once; with no cursor, forward scans start at the
    /// head and backward scans at the tail.
    async fn peek_indexed(&self, direction: Direction) -> Result<Option<(usize, Track)>> {
        let len = self.entries.len();
        if len == 0 {
            return Ok(None);
        }

        let repeat = self.settings.repeat_mode().await?;

        if repeat == RepeatMode::One {
            return match self.current_index {
                Some(index) => Ok(self.resolve(index).await?.map(|track| (index, track))),
                None => Ok(None),
            };
        }

        let wrap = repeat == RepeatMode::All;

        let start = match (direction, self.current_index) {
            (Direction::Forward, Some(current)) => {
                if current + 1 < len {
                    current + 1
                } else if wrap {
                    0
                } else {
                    return Ok(None);
                }
            }
            (Direction::Forward, None) => 0,
            (Direction::Backward, Some(current)) => {
                if current > 0 {
                    current - 1
                } else if wrap {
                    len - 1
                } else {
                    return Ok(None);
                }
            }
            (Direction::Backward, None) => len - 1,
        };

        let mut index = start;
        for _ in 0..len {
            if let Some(track) = self.resolve(index).await? {
                return Ok(Some((index, track)));
            }

            index = match direction {
                Direction::Forward => {
                    if index + 1 < len {
                        index + 1
                    } else if wrap {
                        0
                    } else {
                        return Ok(None);
                    }
                }
                Direction::Backward => {
                    if index > 0 {
                        index - 1
                    } else if wrap {
                        len - 1
                    } else {
                        return Ok(None);
                    }
                }
            };
        }

        // Every entry scanned and none resolved
        Ok(None)
    }
}
