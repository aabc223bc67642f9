//! Batting and bowling token parsing
//!
//! Match tables encode one innings per cell in shorthand notation:
//! `"45*(32)"` for 45 not out from 32 balls, `"3/28"` for 3 wickets
//! conceding 28 runs, and `"DNB"` or `"-"` when the player did not bat
//! or bowl. Live feeds and archival pages disagree on whitespace and
//! marker placement, so parsing is two-tier: a strict pattern first, then
//! a lenient strip-and-split fallback. Neither tier ever raises; a token
//! that fails both simply contributes no figures to the record.

use serde::Serialize;

/// One innings' batting figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BattingFigures {
    pub runs: u32,
    pub balls: u32,
    pub not_out: bool,
}

/// One innings' bowling figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BowlingFigures {
    pub wickets: u32,
    pub runs_conceded: u32,
}

/// Sentinel tokens meaning "no data" (exact, case-sensitive).
fn is_no_data(token: &str) -> bool {
    token == "DNB" || token == "-"
}

/// Parses a batting token like `"45*(32)"` or `"10(15)"`.
///
/// Returns `None` for the `DNB`/`-` sentinels and for tokens neither
/// parsing strategy can make sense of. The `*` marker anywhere before the
/// parenthesis flags a not-out innings.
pub fn parse_batting(token: &str) -> Option<BattingFigures> {
    if is_no_data(token) {
        return None;
    }

    let not_out = token
        .find('(')
        .map(|open| token[..open].contains('*'))
        .unwrap_or_else(|| token.contains('*'));

    if let Some((runs, balls)) = parse_batting_pattern(token) {
        return Some(BattingFigures {
            runs,
            balls,
            not_out,
        });
    }

    if let Some((runs, balls)) = parse_batting_fallback(token) {
        return Some(BattingFigures {
            runs,
            balls,
            not_out,
        });
    }

    tracing::debug!("Unparseable batting token: {:?}", token);
    None
}

/// Strict pattern: `<runs>[*](<balls>)`, tolerating leading markers.
///
/// Takes the trailing digit run before the parenthesis as the score, so
/// decorated tokens like `"b 45*(32)"` still parse.
fn parse_batting_pattern(token: &str) -> Option<(u32, u32)> {
    let open = token.find('(')?;
    let close = open + token[open..].find(')')?;

    let head = token[..open].trim_end().trim_end_matches('*').trim_end();
    let digits_start = head
        .rfind(|c: char| !c.is_ascii_digit())
        .map(|i| i + c_len(head, i))
        .unwrap_or(0);
    let runs: u32 = head[digits_start..].parse().ok()?;
    let balls: u32 = token[open + 1..close].trim().parse().ok()?;

    Some((runs, balls))
}

fn c_len(s: &str, byte_idx: usize) -> usize {
    s[byte_idx..].chars().next().map(char::len_utf8).unwrap_or(1)
}

/// Lenient fallback: drop `*`, `(`, `)` and expect exactly two integer
/// fields separated by whitespace.
fn parse_batting_fallback(token: &str) -> Option<(u32, u32)> {
    let cleaned: String = token
        .chars()
        .map(|c| if matches!(c, '*' | '(' | ')') { ' ' } else { c })
        .collect();

    let mut parts = cleaned.split_whitespace();
    let runs: u32 = parts.next()?.parse().ok()?;
    let balls: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((runs, balls))
}

/// Parses a bowling token like `"3/28"`.
///
/// The `/` separator gates parsing entirely: its absence, the `DNB`/`-`
/// sentinels, or non-integer halves all yield `None`.
pub fn parse_bowling(token: &str) -> Option<BowlingFigures> {
    if is_no_data(token) || !token.contains('/') {
        return None;
    }

    let (left, right) = token.split_once('/')?;
    let wickets: u32 = left.trim().parse().ok()?;
    let runs_conceded: u32 = right.trim().parse().ok()?;

    Some(BowlingFigures {
        wickets,
        runs_conceded,
    })
}
