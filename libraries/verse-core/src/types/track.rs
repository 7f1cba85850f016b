/// Track domain type
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Audio track as cached in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// File path on disk (unique within the library)
    pub file_path: PathBuf,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Release year
    pub year: Option<u32>,

    /// Track number in album
    pub track_number: Option<u32>,

    /// Track duration in milliseconds
    pub duration_ms: Option<u64>,

    /// File size in bytes
    pub file_size: Option<u64>,

    /// How many times the track has been played
    pub play_count: u32,

    /// When the track was last played
    pub last_played_at: Option<DateTime<Utc>>,

    /// When the track was added to the library
    pub added_at: DateTime<Utc>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(title: impl Into<String>, file_path: PathBuf) -> Self {
        Self {
            id: TrackId::new(0),
            file_path,
            title: title.into(),
            artist: None,
            album: None,
            genre: None,
            year: None,
            track_number: None,
            duration_ms: None,
            file_size: None,
            play_count: 0,
            last_played_at: None,
            added_at: Utc::now(),
        }
    }

    /// Get the track duration as a `Duration`
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }

    /// Set the track duration from a `Duration`
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_ms = Some(duration.as_millis() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("Test Song", PathBuf::from("/music/song.mp3"));
        assert_eq!(track.title, "Test Song");
        assert_eq!(track.file_path, PathBuf::from("/music/song.mp3"));
        assert!(track.artist.is_none());
        assert_eq!(track.play_count, 0);
    }

    #[test]
    fn track_duration_conversion() {
        let mut track = Track::new("Song", PathBuf::from("/song.mp3"));
        track.set_duration(Duration::from_secs(180));

        assert_eq!(track.duration_ms, Some(180_000));
        assert_eq!(track.duration(), Some(Duration::from_secs(180)));
    }
}
