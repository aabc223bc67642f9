//! Credit scoring engine
//!
//! Two independently evolved scoring experiments coexist: a raw linear
//! credit accumulator ([`base`]) and a bounded fantasy-style 4-10 rating
//! ([`normalized`]). They are deliberately kept as separate, selectable
//! strategies; their formulas are not interchangeable and must never be
//! merged.

mod base;
mod normalized;

pub use base::{format_weights, score_base, FormatWeights, INVALID_FORMAT};
pub use normalized::score_normalized;

use crate::scrape::MatchRecord;

/// Named scoring strategy, selected per call site (usually from config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Unbounded positive linear combination with format-specific weights.
    /// Signals an unrecognized format with the [`INVALID_FORMAT`] sentinel.
    BasePoints,

    /// Nonlinear rate/milestone formula clamped to `[4.0, 10.0]`.
    Normalized,
}

impl ScoringPolicy {
    /// Parses the config-file key for a policy.
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key {
            "base-points" => Some(Self::BasePoints),
            "normalized" => Some(Self::Normalized),
            _ => None,
        }
    }

    pub fn config_key(&self) -> &'static str {
        match self {
            Self::BasePoints => "base-points",
            Self::Normalized => "normalized",
        }
    }

    /// Scores one match's numeric fields under this policy.
    ///
    /// With [`ScoringPolicy::BasePoints`] the caller must check for the
    /// [`INVALID_FORMAT`] sentinel.
    pub fn score(&self, runs: u32, balls: u32, wickets: u32, catches: u32, format: &str) -> f64 {
        match self {
            Self::BasePoints => score_base(runs, balls, wickets, catches, format),
            Self::Normalized => score_normalized(runs, balls, wickets, catches, format),
        }
    }

    /// Scores an extracted match record.
    ///
    /// Absent batting or bowling figures contribute zero. Catches are not
    /// present in scraped match rows, so they score as zero here; callers
    /// with fielding data use [`ScoringPolicy::score`] directly.
    pub fn score_record(&self, record: &MatchRecord) -> f64 {
        let (runs, balls) = record
            .batting
            .map(|b| (b.runs, b.balls))
            .unwrap_or((0, 0));
        let wickets = record.bowling.map(|b| b.wickets).unwrap_or(0);

        self.score(runs, balls, wickets, 0, &record.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_roundtrip() {
        for policy in [ScoringPolicy::BasePoints, ScoringPolicy::Normalized] {
            assert_eq!(
                ScoringPolicy::from_config_key(policy.config_key()),
                Some(policy)
            );
        }
    }

    #[test]
    fn test_unknown_config_key() {
        assert_eq!(ScoringPolicy::from_config_key("fantasy"), None);
    }

    #[test]
    fn test_policies_disagree() {
        // The two strategies are different formulas, not reparametrizations
        let base = ScoringPolicy::BasePoints.score(50, 40, 2, 1, "ODI");
        let norm = ScoringPolicy::Normalized.score(50, 40, 2, 1, "ODI");
        assert_ne!(base, norm);
    }
}
