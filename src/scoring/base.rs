//! Base-points scoring policy
//!
//! A format-weighted linear combination of a match's counting stats. The
//! result is unbounded; it accumulates rather than rates. An unrecognized
//! match format is signalled with a sentinel value instead of an error so
//! that batch scoring loops can note and skip it cheaply.

/// Sentinel returned by [`score_base`] for an unrecognized match format.
pub const INVALID_FORMAT: f64 = -1.0;

/// Per-format point values for each counting stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatWeights {
    pub run_point: f64,
    pub ball_faced_point: f64,
    pub wicket_point: f64,
    pub catch_point: f64,
}

/// Looks up the base-points weights for a format label (case-insensitive).
///
/// Returns `None` for formats outside Test/ODI/T20.
pub fn format_weights(format: &str) -> Option<FormatWeights> {
    match format.to_lowercase().as_str() {
        "test" => Some(FormatWeights {
            run_point: 0.7,
            ball_faced_point: 0.2,
            wicket_point: 15.0,
            catch_point: 7.0,
        }),
        "odi" => Some(FormatWeights {
            run_point: 0.6,
            ball_faced_point: 0.15,
            wicket_point: 12.0,
            catch_point: 6.0,
        }),
        "t20" => Some(FormatWeights {
            run_point: 0.8,
            ball_faced_point: 0.25,
            wicket_point: 18.0,
            catch_point: 8.0,
        }),
        _ => None,
    }
}

/// Calculates base credit points for one match.
///
/// `runs*run_pt + balls*ball_pt + wickets*wicket_pt + catches*catch_pt`
/// under the format's weights. Returns [`INVALID_FORMAT`] when the format
/// is unrecognized; callers must check before accumulating.
pub fn score_base(runs: u32, balls: u32, wickets: u32, catches: u32, format: &str) -> f64 {
    let weights = match format_weights(format) {
        Some(w) => w,
        None => {
            tracing::warn!("Invalid match format for base scoring: {:?}", format);
            return INVALID_FORMAT;
        }
    };

    f64::from(runs) * weights.run_point
        + f64::from(balls) * weights.ball_faced_point
        + f64::from(wickets) * weights.wicket_point
        + f64::from(catches) * weights.catch_point
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odi_worked_example() {
        // 50*0.6 + 40*0.15 + 2*12 + 1*6 = 30 + 6 + 24 + 6
        let points = score_base(50, 40, 2, 1, "odi");
        assert!((points - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_is_case_insensitive() {
        assert_eq!(score_base(50, 40, 2, 1, "ODI"), score_base(50, 40, 2, 1, "odi"));
        assert_eq!(score_base(10, 5, 0, 0, "Test"), score_base(10, 5, 0, 0, "TEST"));
    }

    #[test]
    fn test_test_weights() {
        // 100*0.7 + 200*0.2 + 1*15 + 0*7
        let points = score_base(100, 200, 1, 0, "Test");
        assert!((points - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_t20_weights() {
        // 30*0.8 + 20*0.25 + 0*18 + 2*8
        let points = score_base(30, 20, 0, 2, "T20");
        assert!((points - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_format_sentinel() {
        assert_eq!(score_base(50, 40, 2, 1, "invalid"), INVALID_FORMAT);
        assert_eq!(score_base(0, 0, 0, 0, "The Hundred"), INVALID_FORMAT);
        assert_eq!(score_base(200, 150, 10, 5, ""), INVALID_FORMAT);
    }

    #[test]
    fn test_zero_activity_is_zero_not_sentinel() {
        assert_eq!(score_base(0, 0, 0, 0, "odi"), 0.0);
    }
}
