//! Error types for queue management

use thiserror::Error;
use verse_core::PlayerError;

/// Queue manager errors
///
/// Variants name the failing collaborator so hosts can apply the right
/// policy: persistence failures leave the in-memory queue authoritative and
/// the session usable, they only mean durability is degraded until the next
/// successful save.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Saving, loading, or clearing the queue snapshot failed
    #[error("queue persistence failure: {0}")]
    Persistence(#[source] PlayerError),

    /// Reading or writing a playback setting failed
    #[error("settings failure: {0}")]
    Settings(#[source] PlayerError),

    /// The track store failed (distinct from a track merely being absent)
    #[error("track store failure: {0}")]
    TrackStore(#[source] PlayerError),
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
