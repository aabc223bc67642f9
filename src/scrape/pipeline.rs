//! Batch pipeline orchestration
//!
//! Drives one full run: fetch each configured player page, extract its
//! match records, score them under the configured policy, persist rows
//! and points, then rebuild every player aggregate from the stored
//! points. Only the fetches are async; everything downstream is a chain
//! of synchronous pure functions.

use crate::aggregate::{aggregate_all, recent_form, summarize_formats};
use crate::config::Config;
use crate::scoring::{ScoringPolicy, INVALID_FORMAT};
use crate::scrape::extractor::extract_match_stats;
use crate::scrape::fetcher::{build_http_client, fetch_page};
use crate::storage::{MatchRow, RunStatus, Storage};
use crate::{ConfigError, CreaseError, Result};
use tracing::{error, info, warn};

/// Summary of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Player pages fetched and extracted successfully
    pub players_succeeded: u32,
    /// Player pages that failed to fetch or extract
    pub players_failed: u32,
    /// Match rows written this run
    pub matches_stored: u64,
    /// Per-match point values written this run
    pub points_stored: u64,
    /// Matches the base-points policy could not score (unrecognized format)
    pub points_skipped: u64,
    /// Player aggregates upserted at the end of the run
    pub aggregates_written: u64,
}

/// Runs the full scrape-score-aggregate pipeline
///
/// A fetch or extraction failure aborts only that player's part of the
/// run; the batch continues and the failure is counted in the report.
/// Storage failures abort the whole run.
pub async fn run_pipeline<S: Storage>(
    config: &Config,
    storage: &mut S,
    config_hash: &str,
) -> Result<PipelineReport> {
    let policy = ScoringPolicy::from_config_key(&config.scraper.scoring_policy).ok_or_else(|| {
        ConfigError::Validation(format!(
            "unknown scoring policy '{}'",
            config.scraper.scoring_policy
        ))
    })?;

    let client = build_http_client(&config.scraper)?;
    let run_id = storage.create_run(config_hash)?;

    info!(
        run_id,
        players = config.players.len(),
        policy = policy.config_key(),
        "starting pipeline run"
    );

    let mut report = PipelineReport::default();

    for entry in &config.players {
        match scrape_one_player(&client, &entry.url, policy, storage).await {
            Ok((matches, points, skipped)) => {
                report.players_succeeded += 1;
                report.matches_stored += matches;
                report.points_stored += points;
                report.points_skipped += skipped;
            }
            Err(CreaseError::Fetch { url, message }) => {
                warn!(url = %url, %message, "fetch failed, skipping player");
                report.players_failed += 1;
            }
            Err(CreaseError::Extract(e)) => {
                warn!(url = %entry.url, error = %e, "extraction failed, skipping player");
                report.players_failed += 1;
            }
            Err(e) => {
                error!(url = %entry.url, error = %e, "pipeline run aborted");
                storage.update_run_status(run_id, RunStatus::Failed)?;
                return Err(e);
            }
        }
    }

    report.aggregates_written = rebuild_aggregates(storage)?;
    storage.complete_run(run_id)?;

    info!(
        run_id,
        succeeded = report.players_succeeded,
        failed = report.players_failed,
        matches = report.matches_stored,
        aggregates = report.aggregates_written,
        "pipeline run complete"
    );

    Ok(report)
}

/// Fetches, extracts, scores, and persists one player page
///
/// Returns the number of match rows written, point values written, and
/// points skipped because the base-points policy rejected the format.
async fn scrape_one_player<S: Storage>(
    client: &reqwest::Client,
    url: &str,
    policy: ScoringPolicy,
    storage: &mut S,
) -> Result<(u64, u64, u64)> {
    let html = fetch_page(client, url).await?;
    let stats = extract_match_stats(&html)?;

    info!(
        player = %stats.player_name,
        records = stats.records.len(),
        url = %url,
        "extracted match records"
    );

    for (format, summary) in summarize_formats(&stats.records) {
        info!(
            player = %stats.player_name,
            format = %format,
            matches = summary.matches,
            runs = summary.runs,
            average = summary.average,
            strike_rate = summary.strike_rate,
            "career summary"
        );
    }
    info!(
        player = %stats.player_name,
        form = ?recent_form(&stats.records),
        "recent form"
    );

    let mut matches = 0;
    let mut points = 0;
    let mut skipped = 0;

    for record in &stats.records {
        let row = MatchRow::from_record(record);
        storage.put_match(&row)?;
        matches += 1;

        let point = policy.score_record(record);

        // The base-points policy signals an unrecognized format with a
        // sentinel; persisting it would corrupt the player's average
        if policy == ScoringPolicy::BasePoints && point == INVALID_FORMAT {
            warn!(
                player = %record.player_name,
                format = %record.format,
                "unrecognized format under base-points policy, skipping point"
            );
            skipped += 1;
            continue;
        }

        storage.put_player_point(&record.player_name, point)?;
        points += 1;
    }

    Ok((matches, points, skipped))
}

/// Replays every stored point and rewrites the per-player aggregates
///
/// Aggregates cover all points ever stored, not just this run's, so
/// repeated runs keep enriching the same players.
fn rebuild_aggregates<S: Storage>(storage: &mut S) -> Result<u64> {
    let all_points = storage.all_points()?;
    let aggregates = aggregate_all(&all_points);

    let mut written = 0;
    for (player, aggregate) in &aggregates {
        storage.upsert_aggregate(player, aggregate)?;
        written += 1;
    }

    Ok(written)
}
