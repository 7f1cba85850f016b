//! Cached playback settings
//!
//! Thin adapter over the settings store that caches the two playback
//! settings in memory: populated on first read, updated on every write, so
//! repeated reads in a session never round-trip to the store. There is no
//! TTL and no external invalidation; this process is assumed to be the sole
//! writer. A multi-process deployment would need cache invalidation, which
//! is out of scope here.

use crate::error::{PlaybackError, Result};
use std::sync::{Arc, Mutex};
use verse_core::{RepeatMode, SettingsStore};

#[derive(Default)]
struct CachedValues {
    shuffle_enabled: Option<bool>,
    repeat_mode: Option<RepeatMode>,
}

/// Settings adapter with an in-memory cache
pub struct SettingsCache {
    store: Arc<dyn SettingsStore>,
    // Plain mutex around two Copy values, never held across an await
    cached: Mutex<CachedValues>,
}

impl SettingsCache {
    /// Create a cache over a settings store
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self {
            store,
            cached: Mutex::new(CachedValues::default()),
        }
    }

    /// Whether shuffle is enabled
    pub async fn shuffle_enabled(&self) -> Result<bool> {
        if let Some(enabled) = self.cached.lock().unwrap().shuffle_enabled {
            return Ok(enabled);
        }

        let enabled = self
            .store
            .shuffle_enabled()
            .await
            .map_err(PlaybackError::Settings)?;
        self.cached.lock().unwrap().shuffle_enabled = Some(enabled);
        Ok(enabled)
    }

    /// Persist the shuffle flag and update the cache
    pub async fn set_shuffle_enabled(&self, enabled: bool) -> Result<()> {
        self.store
            .set_shuffle_enabled(enabled)
            .await
            .map_err(PlaybackError::Settings)?;
        self.cached.lock().unwrap().shuffle_enabled = Some(enabled);
        Ok(())
    }

    /// Current repeat mode
    pub async fn repeat_mode(&self) -> Result<RepeatMode> {
        if let Some(mode) = self.cached.lock().unwrap().repeat_mode {
            return Ok(mode);
        }

        let mode = self
            .store
            .repeat_mode()
            .await
            .map_err(PlaybackError::Settings)?;
        self.cached.lock().unwrap().repeat_mode = Some(mode);
        Ok(mode)
    }

    /// Persist the repeat mode and update the cache
    pub async fn set_repeat_mode(&self, mode: RepeatMode) -> Result<()> {
        self.store
            .set_repeat_mode(mode)
            .await
            .map_err(PlaybackError::Settings)?;
        self.cached.lock().unwrap().repeat_mode = Some(mode);
        Ok(())
    }
}
