//! Verse Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Verse Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback engine and the storage layer.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `QueueEntry`, `RepeatMode`, id newtypes
//! - **Store Seams**: `TrackStore`, `SettingsStore`, `QueueStore`
//! - **Error Handling**: Unified `PlayerError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use verse_core::{QueueEntry, RepeatMode, TrackId};
//!
//! // A freshly enqueued entry has no persistent id yet
//! let entry = QueueEntry::new(TrackId::new(42));
//! assert!(entry.id.is_none());
//! assert!(!entry.is_current);
//!
//! assert_eq!(RepeatMode::from_str("all"), Some(RepeatMode::All));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{PlayerError, Result};
pub use traits::{QueueStore, SettingsStore, TrackStore};
pub use types::{EntryId, QueueEntry, RepeatMode, Track, TrackId};
