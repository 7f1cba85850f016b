//! Verse Player - Queue Management
//!
//! Platform-agnostic play-queue and playback-session management for Verse
//! Player.
//!
//! This crate provides:
//! - Ordered play queue with contiguous positions
//! - Current-track cursor with next/previous navigation
//! - Repeat modes (Off, All, One) with boundary wraparound
//! - Identity-preserving shuffle (the playing track never changes)
//! - Snapshot persistence so the session survives restarts
//! - Cached playback settings (shuffle flag, repeat mode)
//!
//! # Architecture
//!
//! `verse-playback` never talks to a database directly: the track library,
//! settings, and queue persistence are reached through the `verse-core`
//! store seams, so the same manager runs against SQLite in the app and
//! against in-memory fakes in tests.
//!
//! The manager is single-owner by design: the host funnels playback
//! orchestration and UI commands through one logical caller and performs no
//! concurrent mutation. Persistence failures are surfaced but never fatal;
//! the in-memory queue stays authoritative until the next successful save.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use verse_core::{QueueStore, SettingsStore, TrackId, TrackStore};
//! use verse_playback::QueueManager;
//!
//! # async fn example(
//! #     tracks: Arc<dyn TrackStore>,
//! #     settings: Arc<dyn SettingsStore>,
//! #     queue: Arc<dyn QueueStore>,
//! # ) -> verse_playback::Result<()> {
//! let mut manager = QueueManager::new(tracks, settings, queue);
//!
//! // Pick up the queue from the previous session
//! manager.restore().await?;
//!
//! // Queue two tracks and start playing
//! manager.enqueue_tail(TrackId::new(1)).await?;
//! manager.enqueue_tail(TrackId::new(2)).await?;
//! let now_playing = manager.advance().await?;
//! # let _ = now_playing;
//! # Ok(())
//! # }
//! ```

mod error;
mod manager;
mod settings;
mod shuffle;

// Public exports
pub use error::{PlaybackError, Result};
pub use manager::QueueManager;
pub use settings::SettingsCache;
