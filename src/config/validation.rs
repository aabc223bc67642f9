use crate::config::types::{Config, OutputConfig, PlayerEntry, ScraperConfig};
use crate::scoring::ScoringPolicy;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    validate_players(&config.players)?;
    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if ScoringPolicy::from_config_key(&config.scoring_policy).is_none() {
        return Err(ConfigError::Validation(format!(
            "scoring_policy must be 'base-points' or 'normalized', got '{}'",
            config.scoring_policy
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates player entries
fn validate_players(players: &[PlayerEntry]) -> Result<(), ConfigError> {
    if players.is_empty() {
        return Err(ConfigError::Validation(
            "at least one [[players]] entry is required".to_string(),
        ));
    }

    for entry in players {
        let url = Url::parse(&entry.url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid player URL '{}': {}", entry.url, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Player URL '{}' must use http or https scheme",
                entry.url
            )));
        }

        if let Some(name) = &entry.name {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Player name for '{}' cannot be blank",
                    entry.url
                )));
            }
        }
    }

    Ok(())
}
