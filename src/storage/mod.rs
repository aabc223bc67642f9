//! Storage module for persisting pipeline data
//!
//! This module handles all database operations for the pipeline, including:
//! - SQLite database initialization and schema management
//! - Match row and per-match credit point persistence
//! - Per-player aggregate upserts
//! - Run tracking

mod schema;
mod sqlite;
mod traits;

pub use schema::initialize_schema;
pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::scrape::MatchRecord;
use crate::CreaseError;

use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(CreaseError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> Result<SqliteStorage, CreaseError> {
    SqliteStorage::new(path)
}

/// Persisted shape of one scraped match
///
/// Optional batting and bowling figures collapse to zero-filled columns
/// so that downstream scoring never has to special-case missing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub player_name: String,
    pub opponent: String,
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub wickets_taken: u32,
    pub catch_taken: u32,
    pub format: String,
    pub date: String,
}

impl MatchRow {
    /// Flattens a typed match record into its persisted shape
    pub fn from_record(record: &MatchRecord) -> Self {
        Self {
            player_name: record.player_name.clone(),
            opponent: record.opponent.clone(),
            runs_scored: record.runs(),
            balls_faced: record.balls_faced(),
            wickets_taken: record.wickets(),
            catch_taken: 0,
            format: record.format.clone(),
            date: record.date.clone(),
        }
    }
}

/// Status of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "running" => Some(Self::Running),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::{BattingFigures, BowlingFigures};

    #[test]
    fn test_run_status_roundtrip() {
        for status in &[RunStatus::Running, RunStatus::Completed, RunStatus::Failed] {
            let db_str = status.to_db_string();
            let parsed = RunStatus::from_db_string(db_str);
            assert_eq!(Some(*status), parsed);
        }
    }

    #[test]
    fn test_run_status_invalid() {
        assert_eq!(RunStatus::from_db_string("invalid"), None);
    }

    #[test]
    fn test_match_row_from_full_record() {
        let record = MatchRecord {
            player_name: "Virat Kohli".to_string(),
            opponent: "Australia".to_string(),
            format: "ODI".to_string(),
            date: "2024-02-11".to_string(),
            batting: Some(BattingFigures {
                runs: 85,
                balls: 92,
                not_out: true,
            }),
            bowling: Some(BowlingFigures {
                wickets: 1,
                runs_conceded: 12,
            }),
        };

        let row = MatchRow::from_record(&record);
        assert_eq!(row.runs_scored, 85);
        assert_eq!(row.balls_faced, 92);
        assert_eq!(row.wickets_taken, 1);
        assert_eq!(row.catch_taken, 0);
    }

    #[test]
    fn test_match_row_zero_fills_missing_figures() {
        let record = MatchRecord {
            player_name: "Jasprit Bumrah".to_string(),
            opponent: "England".to_string(),
            format: "Test".to_string(),
            date: "2024-01-28".to_string(),
            batting: None,
            bowling: None,
        };

        let row = MatchRow::from_record(&record);
        assert_eq!(row.runs_scored, 0);
        assert_eq!(row.balls_faced, 0);
        assert_eq!(row.wickets_taken, 0);
    }
}
