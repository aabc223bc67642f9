use serde::Deserialize;

/// Main configuration structure for Crease
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// User agent header sent with every page request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Credit scoring policy: "base-points" or "normalized"
    #[serde(rename = "scoring-policy")]
    pub scoring_policy: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

/// One player profile page to scrape
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntry {
    /// Optional display name hint (extraction resolves the real name)
    #[serde(default)]
    pub name: Option<String>,

    /// Profile page URL
    pub url: String,
}
