//! Aggregation engine
//!
//! Reduces per-match credit points into per-player averages, and per-match
//! batting figures into per-format career summaries. Aggregation is a full
//! recomputation every run: all stored points are replayed and the results
//! overwrite whatever was persisted before. There is no incremental path.

use crate::scrape::MatchRecord;
use std::collections::HashMap;

/// Per-player credit summary, one row per unique player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    pub total_matches: u64,
    pub average_credit: f64,
}

/// Per-format batting summary for one player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatSummary {
    pub matches: u64,
    pub innings: u64,
    pub runs: u64,
    pub balls: u64,
    pub centuries: u64,
    pub half_centuries: u64,
    pub not_outs: u64,
    /// Runs per dismissal; equals total runs when never dismissed.
    pub average: f64,
    /// Runs per hundred balls; zero when no balls faced.
    pub strike_rate: f64,
}

/// Arithmetic mean of one player's credit points.
///
/// Returns 0.0 for an empty sequence.
pub fn mean(points: &[f64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().sum::<f64>() / points.len() as f64
}

/// Groups `(player_name, point)` pairs by player and averages each group.
pub fn aggregate_all<S: AsRef<str>>(pairs: &[(S, f64)]) -> HashMap<String, PlayerAggregate> {
    let mut grouped: HashMap<String, Vec<f64>> = HashMap::new();
    for (name, point) in pairs {
        grouped
            .entry(name.as_ref().to_string())
            .or_default()
            .push(*point);
    }

    grouped
        .into_iter()
        .map(|(name, points)| {
            let aggregate = PlayerAggregate {
                total_matches: points.len() as u64,
                average_credit: mean(&points),
            };
            (name, aggregate)
        })
        .collect()
}

/// Builds per-format batting summaries from one player's match records.
///
/// Every record counts as a match for its format; only records with
/// batting figures count as innings. Centuries and half-centuries are
/// mutually exclusive buckets here (a hundred is not also a fifty).
pub fn summarize_formats(records: &[MatchRecord]) -> HashMap<String, FormatSummary> {
    let mut formats: HashMap<String, FormatSummary> = HashMap::new();

    for record in records {
        let summary = formats.entry(record.format.clone()).or_default();
        summary.matches += 1;

        if let Some(batting) = record.batting {
            summary.innings += 1;
            summary.runs += u64::from(batting.runs);
            summary.balls += u64::from(batting.balls);

            if batting.runs >= 100 {
                summary.centuries += 1;
            } else if batting.runs >= 50 {
                summary.half_centuries += 1;
            }
            if batting.not_out {
                summary.not_outs += 1;
            }
        }
    }

    for summary in formats.values_mut() {
        if summary.innings > 0 {
            let dismissals = summary.innings - summary.not_outs;
            summary.average = if dismissals > 0 {
                round2(summary.runs as f64 / dismissals as f64)
            } else {
                summary.runs as f64
            };
            summary.strike_rate = if summary.balls > 0 {
                round2(summary.runs as f64 * 100.0 / summary.balls as f64)
            } else {
                0.0
            };
        }
    }

    formats
}

/// Last five scored innings by descending date, rendered `"45*"` style.
///
/// ISO-normalized dates sort correctly as strings; raw passthrough dates
/// sort wherever their text places them, which keeps the output
/// deterministic for identical input.
pub fn recent_form(records: &[MatchRecord]) -> Vec<String> {
    let mut sorted: Vec<&MatchRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .iter()
        .filter_map(|record| {
            record.batting.map(|batting| {
                let marker = if batting.not_out { "*" } else { "" };
                format!("{}{}", batting.runs, marker)
            })
        })
        .take(5)
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::{BattingFigures, MatchRecord};

    fn record(format: &str, date: &str, batting: Option<(u32, u32, bool)>) -> MatchRecord {
        MatchRecord {
            player_name: "Test Player".to_string(),
            opponent: "Australia".to_string(),
            format: format.to_string(),
            date: date.to_string(),
            batting: batting.map(|(runs, balls, not_out)| BattingFigures {
                runs,
                balls,
                not_out,
            }),
            bowling: None,
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[6.0, 8.0]), 7.0);
        assert_eq!(mean(&[5.0]), 5.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_aggregate_all_groups_by_player() {
        let pairs = [("A", 6.0), ("A", 8.0), ("B", 5.0)];
        let aggregates = aggregate_all(&pairs);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates["A"].total_matches, 2);
        assert_eq!(aggregates["A"].average_credit, 7.0);
        assert_eq!(aggregates["B"].total_matches, 1);
        assert_eq!(aggregates["B"].average_credit, 5.0);
    }

    #[test]
    fn test_aggregate_all_empty() {
        let aggregates = aggregate_all::<&str>(&[]);
        assert!(aggregates.is_empty());
    }

    #[test]
    fn test_summarize_counts_matches_and_innings() {
        let records = vec![
            record("ODI", "2023-01-15", Some((45, 32, false))),
            record("ODI", "2023-01-18", None), // fielding-only appearance
            record("Test", "2023-02-01", Some((120, 250, false))),
        ];

        let formats = summarize_formats(&records);
        assert_eq!(formats["ODI"].matches, 2);
        assert_eq!(formats["ODI"].innings, 1);
        assert_eq!(formats["Test"].centuries, 1);
        assert_eq!(formats["Test"].half_centuries, 0);
    }

    #[test]
    fn test_summarize_average_and_strike_rate() {
        let records = vec![
            record("ODI", "2023-01-15", Some((50, 40, false))),
            record("ODI", "2023-01-18", Some((30, 40, true))),
        ];

        let formats = summarize_formats(&records);
        let odi = &formats["ODI"];
        // 80 runs over 1 dismissal
        assert_eq!(odi.average, 80.0);
        // 80 * 100 / 80 balls
        assert_eq!(odi.strike_rate, 100.0);
        assert_eq!(odi.not_outs, 1);
    }

    #[test]
    fn test_summarize_never_dismissed() {
        let records = vec![record("T20", "2023-03-01", Some((25, 10, true)))];
        let formats = summarize_formats(&records);
        assert_eq!(formats["T20"].average, 25.0);
    }

    #[test]
    fn test_recent_form_orders_and_limits() {
        let records = vec![
            record("ODI", "2023-01-01", Some((10, 20, false))),
            record("ODI", "2023-01-05", Some((45, 32, true))),
            record("ODI", "2023-01-03", None),
            record("ODI", "2023-01-02", Some((7, 11, false))),
            record("ODI", "2023-01-04", Some((90, 80, false))),
            record("ODI", "2023-01-06", Some((0, 2, false))),
            record("ODI", "2023-01-07", Some((33, 30, false))),
        ];

        let form = recent_form(&records);
        assert_eq!(form, vec!["33", "0", "45*", "90", "7"]);
    }
}
