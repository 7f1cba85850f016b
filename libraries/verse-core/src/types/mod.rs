//! Domain types for Verse Player

mod ids;
mod playback;
mod queue;
mod track;

pub use ids::{EntryId, TrackId};
pub use playback::RepeatMode;
pub use queue::QueueEntry;
pub use track::Track;
