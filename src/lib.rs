//! Crease: cricket player credit-point pipeline
//!
//! This crate scrapes player match-statistics pages, converts the
//! semi-structured batting/bowling tokens into typed match records, scores
//! each match under a selectable credit-point policy, and aggregates
//! per-player averages that can be looked up by fuzzy name match.

pub mod aggregate;
pub mod config;
pub mod index;
pub mod lookup;
pub mod scoring;
pub mod scrape;
pub mod storage;

use thiserror::Error;

/// Main error type for Crease operations
#[derive(Debug, Error)]
pub enum CreaseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Hard, per-document extraction failures.
///
/// Row-level problems are never surfaced through this type; they are
/// soft-skipped so that one malformed row cannot abort a whole page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Could not locate a match statistics table in the document")]
    TableNotFound,

    #[error("Match table has no body section")]
    MissingBody,

    #[error("Match table body contains no rows")]
    NoRows,
}

/// Result type alias for Crease operations
pub type Result<T> = std::result::Result<T, CreaseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scoring::ScoringPolicy;
pub use scrape::{BattingFigures, BowlingFigures, MatchRecord};
