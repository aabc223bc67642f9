//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::aggregate::PlayerAggregate;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageResult};
use crate::storage::{MatchRow, RunStatus};
use crate::CreaseError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(CreaseError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, CreaseError> {
        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self, CreaseError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    // ===== Run Management =====

    fn create_run(&mut self, config_hash: &str) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO runs (started_at, config_hash, status) VALUES (?1, ?2, ?3)",
            params![now, config_hash, RunStatus::Running.to_db_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_run_status(&mut self, run_id: i64, status: RunStatus) -> StorageResult<()> {
        self.conn.execute(
            "UPDATE runs SET status = ?1 WHERE id = ?2",
            params![status.to_db_string(), run_id],
        )?;
        Ok(())
    }

    fn complete_run(&mut self, run_id: i64) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "UPDATE runs SET status = ?1, finished_at = ?2 WHERE id = ?3",
            params![RunStatus::Completed.to_db_string(), now, run_id],
        )?;
        Ok(())
    }

    // ===== Match Rows =====

    fn put_match(&mut self, row: &MatchRow) -> StorageResult<i64> {
        self.conn.execute(
            "INSERT INTO matches (player_name, opponent, runs_scored, balls_faced,
             wickets_taken, catch_taken, format, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                row.player_name,
                row.opponent,
                row.runs_scored,
                row.balls_faced,
                row.wickets_taken,
                row.catch_taken,
                row.format,
                row.date,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn matches_for_player(&self, player_name: &str) -> StorageResult<Vec<MatchRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, opponent, runs_scored, balls_faced,
             wickets_taken, catch_taken, format, date
             FROM matches WHERE player_name = ?1 ORDER BY date DESC",
        )?;

        let rows = stmt.query_map(params![player_name], |row| {
            Ok(MatchRow {
                player_name: row.get(0)?,
                opponent: row.get(1)?,
                runs_scored: row.get(2)?,
                balls_faced: row.get(3)?,
                wickets_taken: row.get(4)?,
                catch_taken: row.get(5)?,
                format: row.get(6)?,
                date: row.get(7)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    // ===== Credit Points =====

    fn put_player_point(&mut self, player_name: &str, point: f64) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO player_points (player_name, point) VALUES (?1, ?2)",
            params![player_name, point],
        )?;
        Ok(())
    }

    fn player_points(&self, player_name: &str) -> StorageResult<Vec<f64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT point FROM player_points WHERE player_name = ?1 ORDER BY id")?;

        let rows = stmt.query_map(params![player_name], |row| row.get(0))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn all_points(&self) -> StorageResult<Vec<(String, f64)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_name, point FROM player_points ORDER BY id")?;

        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    // ===== Aggregates =====

    fn upsert_aggregate(
        &mut self,
        player_name: &str,
        aggregate: &PlayerAggregate,
    ) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO player_aggregates (player_name, total_matches, avg_credit)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(player_name) DO UPDATE SET
               total_matches = excluded.total_matches,
               avg_credit = excluded.avg_credit",
            params![player_name, aggregate.total_matches, aggregate.average_credit],
        )?;
        Ok(())
    }

    fn get_aggregate(&self, player_name: &str) -> StorageResult<Option<PlayerAggregate>> {
        let aggregate = self
            .conn
            .query_row(
                "SELECT total_matches, avg_credit FROM player_aggregates WHERE player_name = ?1",
                params![player_name],
                |row| {
                    Ok(PlayerAggregate {
                        total_matches: row.get(0)?,
                        average_credit: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(aggregate)
    }

    fn all_aggregates(&self) -> StorageResult<Vec<(String, PlayerAggregate)>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_name, total_matches, avg_credit
             FROM player_aggregates ORDER BY player_name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                PlayerAggregate {
                    total_matches: row.get(1)?,
                    average_credit: row.get(2)?,
                },
            ))
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn player_names(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_name FROM player_aggregates ORDER BY player_name")?;

        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    // ===== Statistics =====

    fn count_matches(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_points(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM player_points", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_players(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM player_aggregates", [], |row| {
                row.get(0)
            })?;
        Ok(count as u64)
    }
}
