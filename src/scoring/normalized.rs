//! Normalized 4-10 scoring policy
//!
//! Rates a match on a bounded fantasy-style scale: a scoring-rate bonus,
//! additive milestone bonuses (a century earns both the fifty and the
//! hundred bonus), flat wicket and catch weights, and a format multiplier,
//! then scaled down and clamped to `[4.0, 10.0]`. The floor applies even
//! to a wicketless duck, so every appearance is worth at least 4.0.

/// Calculates normalized credit points for one match, in `[4.0, 10.0]`.
///
/// Unlike the base-points policy, an unrecognized format is not an error
/// here; it simply gets the neutral 1.0 multiplier. The format labels are
/// matched as the source prints them (`Test`/`ODI`/`T20`).
pub fn score_normalized(runs: u32, balls: u32, wickets: u32, catches: u32, format: &str) -> f64 {
    let mut points = 0.0;

    // Batting: runs per ball faced, plus milestone bonuses
    if balls > 0 {
        points += f64::from(runs) / f64::from(balls) * 10.0;
    }
    if runs >= 50 {
        points += 20.0;
    }
    if runs >= 100 {
        points += 50.0;
    }

    // Bowling and fielding
    points += f64::from(wickets) * 30.0;
    points += f64::from(catches) * 10.0;

    // Format-specific adjustment
    points *= match format {
        "Test" => 1.2,
        "ODI" => 1.0,
        "T20" => 0.8,
        _ => 1.0,
    };

    // Scale and clamp
    points = (points / 10.0).clamp(4.0, 10.0);

    (points * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_century_hits_ceiling() {
        // rate 100/50*10 = 20, +20 fifty, +50 century = 90; *1.2 = 108;
        // /10 = 10.8 -> clamped to 10.0
        assert_eq!(score_normalized(100, 50, 0, 0, "Test"), 10.0);
    }

    #[test]
    fn test_zero_activity_floor() {
        assert_eq!(score_normalized(0, 0, 0, 0, "ODI"), 4.0);
    }

    #[test]
    fn test_milestone_bonuses_are_additive() {
        // A century earns both bonuses: with equal rate, the century
        // innings outscores the fifty by the extra 50-point bonus
        let fifty = score_normalized(50, 100, 0, 0, "ODI");
        let century = score_normalized(100, 200, 0, 0, "ODI");
        // fifty: 5 + 20 = 25 -> 4.0 (clamped up from 2.5)
        // century: 5 + 20 + 50 = 75 -> 7.5
        assert_eq!(fifty, 4.0);
        assert_eq!(century, 7.5);
    }

    #[test]
    fn test_wicket_weight() {
        // 3 wickets = 90 points -> 9.0 in an ODI
        assert_eq!(score_normalized(0, 0, 3, 0, "ODI"), 9.0);
    }

    #[test]
    fn test_t20_discount() {
        // 3 wickets = 90 * 0.8 = 72 -> 7.2
        assert_eq!(score_normalized(0, 0, 3, 0, "T20"), 7.2);
    }

    #[test]
    fn test_unrecognized_format_is_neutral() {
        assert_eq!(
            score_normalized(0, 0, 3, 0, "List A"),
            score_normalized(0, 0, 3, 0, "ODI")
        );
    }

    #[test]
    fn test_two_decimal_rounding() {
        // rate 33/48*10 = 6.875 -> 0.6875 -> clamped to 4.0 floor
        assert_eq!(score_normalized(33, 48, 0, 0, "ODI"), 4.0);
        // 2 wickets + 1 catch = 70, *1.2 = 84 -> 8.4
        assert_eq!(score_normalized(0, 0, 2, 1, "Test"), 8.4);
    }

    #[test]
    fn test_catches_count() {
        let without = score_normalized(0, 0, 2, 0, "ODI");
        let with = score_normalized(0, 0, 2, 1, "ODI");
        assert!(with > without);
    }
}
