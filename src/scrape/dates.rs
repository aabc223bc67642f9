//! Match date normalization
//!
//! Source pages alternate between `15-Jan-2023` and `15 Jan 2023` style
//! dates. Downstream consumers want ISO `YYYY-MM-DD`, but an unparseable
//! date must never abort a row, so the raw text passes through unchanged
//! when neither format applies.

use chrono::NaiveDate;

/// Normalizes a free-text match date to `YYYY-MM-DD`.
///
/// Tries `DD-Mon-YYYY` then `DD Mon YYYY`; returns the input unchanged on
/// failure. Always returns a usable string.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    NaiveDate::parse_from_str(trimmed, "%d-%b-%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d %b %Y"))
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_delimited() {
        assert_eq!(normalize("15-Jan-2023"), "2023-01-15");
    }

    #[test]
    fn test_space_delimited() {
        assert_eq!(normalize("15 Jan 2023"), "2023-01-15");
    }

    #[test]
    fn test_december() {
        assert_eq!(normalize("03-Dec-2019"), "2019-12-03");
    }

    #[test]
    fn test_passthrough_on_failure() {
        assert_eq!(normalize("garbage"), "garbage");
        assert_eq!(normalize("2023-01-15"), "2023-01-15");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_invalid_day_passes_through() {
        assert_eq!(normalize("32-Jan-2023"), "32-Jan-2023");
    }
}
