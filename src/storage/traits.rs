//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::aggregate::PlayerAggregate;
use crate::storage::{MatchRow, RunStatus};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Run not found: {0}")]
    RunNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// This trait defines all database operations needed by the pipeline
/// and the lookup service.
pub trait Storage {
    // ===== Run Management =====

    /// Creates a new pipeline run
    ///
    /// # Arguments
    ///
    /// * `config_hash` - Hash of the configuration file
    ///
    /// # Returns
    ///
    /// The ID of the newly created run
    fn create_run(&mut self, config_hash: &str) -> StorageResult<i64>;

    /// Updates the status of a run
    fn update_run_status(&mut self, run_id: i64, status: RunStatus) -> StorageResult<()>;

    /// Marks a run as completed with a finish timestamp
    fn complete_run(&mut self, run_id: i64) -> StorageResult<()>;

    // ===== Match Rows =====

    /// Inserts one scraped match row
    fn put_match(&mut self, row: &MatchRow) -> StorageResult<i64>;

    /// Gets all match rows for a player, newest first by date string
    fn matches_for_player(&self, player_name: &str) -> StorageResult<Vec<MatchRow>>;

    // ===== Credit Points =====

    /// Records one per-match credit point value for a player
    fn put_player_point(&mut self, player_name: &str, point: f64) -> StorageResult<()>;

    /// Gets all recorded point values for a player
    fn player_points(&self, player_name: &str) -> StorageResult<Vec<f64>>;

    /// Gets every (player, point) pair in insertion order
    fn all_points(&self) -> StorageResult<Vec<(String, f64)>>;

    // ===== Aggregates =====

    /// Inserts or replaces the rolled-up figures for a player
    fn upsert_aggregate(
        &mut self,
        player_name: &str,
        aggregate: &PlayerAggregate,
    ) -> StorageResult<()>;

    /// Gets the aggregate for one player, if any
    fn get_aggregate(&self, player_name: &str) -> StorageResult<Option<PlayerAggregate>>;

    /// Gets all aggregates, sorted by player name
    fn all_aggregates(&self) -> StorageResult<Vec<(String, PlayerAggregate)>>;

    /// Gets the sorted list of player names with aggregates
    ///
    /// This is the candidate set for fuzzy name lookup.
    fn player_names(&self) -> StorageResult<Vec<String>>;

    // ===== Statistics =====

    /// Counts stored match rows
    fn count_matches(&self) -> StorageResult<u64>;

    /// Counts stored per-match point values
    fn count_points(&self) -> StorageResult<u64>;

    /// Counts players with aggregates
    fn count_players(&self) -> StorageResult<u64>;
}
