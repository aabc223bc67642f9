//! Scraping module for player statistics pages
//!
//! This module contains the extraction pipeline, including:
//! - HTTP fetching of player profile pages
//! - Match table location and row extraction
//! - Batting/bowling token parsing and date normalization
//! - Batch orchestration over a configured player list

mod dates;
mod extractor;
mod fetcher;
mod pipeline;
mod tokens;

pub use dates::normalize as normalize_date;
pub use extractor::{extract_match_stats, extract_player_name, ExtractedStats};
pub use fetcher::{build_http_client, fetch_page};
pub use pipeline::{run_pipeline, PipelineReport};
pub use tokens::{parse_batting, parse_bowling, BattingFigures, BowlingFigures};

use serde::Serialize;

/// One structured match record, derived from a single table row.
///
/// Immutable once created. Batting fields are all-or-nothing (runs, balls
/// and the not-out flag either all parsed or none did), and likewise for
/// bowling; a record with neither is a valid fielding-only appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub player_name: String,
    pub opponent: String,
    /// Raw format label as printed by the source (e.g. "Test", "ODI",
    /// "T20"); matched case-insensitively downstream.
    pub format: String,
    /// Canonical `YYYY-MM-DD` when the source date parsed, otherwise the
    /// raw cell text. Non-empty whenever a date cell existed.
    pub date: String,
    pub batting: Option<BattingFigures>,
    pub bowling: Option<BowlingFigures>,
}

impl MatchRecord {
    /// Runs scored, defaulting to 0 when the player did not bat.
    pub fn runs(&self) -> u32 {
        self.batting.map(|b| b.runs).unwrap_or(0)
    }

    /// Balls faced, defaulting to 0 when the player did not bat.
    pub fn balls_faced(&self) -> u32 {
        self.batting.map(|b| b.balls).unwrap_or(0)
    }

    /// Wickets taken, defaulting to 0 when the player did not bowl.
    pub fn wickets(&self) -> u32 {
        self.bowling.map(|b| b.wickets).unwrap_or(0)
    }
}
