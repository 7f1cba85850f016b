//! Verse Player Storage
//!
//! `SQLite` database layer for Verse Player.
//!
//! This crate provides persistent storage for the track library, the play
//! queue snapshot, playback settings, and play history.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Trait Adapters**: Thin wrappers implement the `verse-core` store
//!   seams so the playback engine never sees SQL
//! - **Dangling-Tolerant**: Queue entries carry no foreign key to tracks;
//!   a deleted track leaves a dangling reference that readers skip
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_storage::{create_pool, run_migrations, queue};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://verse.db").await?;
//! run_migrations(&pool).await?;
//!
//! // Load the persisted queue snapshot
//! let entries = queue::load_snapshot(&pool).await?;
//! # Ok(())
//! # }
//! ```

mod adapters;
mod error;

// Vertical slices
pub mod history;
pub mod queue;
pub mod settings;
pub mod tracks;

pub use adapters::{SqliteQueueStore, SqliteSettingsStore, SqliteTrackStore};
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://verse.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!("creating pool with URL: {}", database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    debug!("pool created");

    Ok(pool)
}
