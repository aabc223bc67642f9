//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Crease database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Track pipeline runs
CREATE TABLE IF NOT EXISTS runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    started_at TEXT NOT NULL,
    finished_at TEXT,
    config_hash TEXT NOT NULL,
    status TEXT NOT NULL
);

-- One row per scraped match, with sentinel-free numeric columns.
-- Missing batting or bowling figures are stored as zeros, so every
-- row is directly usable by the scoring policies.
CREATE TABLE IF NOT EXISTS matches (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_name TEXT NOT NULL,
    opponent TEXT NOT NULL,
    runs_scored INTEGER NOT NULL DEFAULT 0,
    balls_faced INTEGER NOT NULL DEFAULT 0,
    wickets_taken INTEGER NOT NULL DEFAULT 0,
    catch_taken INTEGER NOT NULL DEFAULT 0,
    format TEXT NOT NULL,
    date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_matches_player ON matches(player_name);

-- Per-match credit points, one row per scored match
CREATE TABLE IF NOT EXISTS player_points (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_name TEXT NOT NULL,
    point REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_points_player ON player_points(player_name);

-- Rolled-up per-player figures, replaced wholesale at the end of a run
CREATE TABLE IF NOT EXISTS player_aggregates (
    player_name TEXT PRIMARY KEY,
    total_matches INTEGER NOT NULL,
    avg_credit REAL NOT NULL
);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
