//! Configuration loading and validation
//!
//! Run configuration comes from a TOML file with three sections:
//! `[scraper]` for HTTP and scoring behavior, `[output]` for the
//! database location, and one `[[players]]` entry per profile page
//! to scrape.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, OutputConfig, PlayerEntry, ScraperConfig};
pub use validation::validate;
