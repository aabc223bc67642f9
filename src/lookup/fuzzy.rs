//! Fuzzy player-name matching
//!
//! Lookup queries rarely spell a player's name exactly as it was scraped,
//! so the service matches against the stored candidate set with a
//! normalized Levenshtein ratio. Scores are scaled to 0-100 and anything
//! under [`MATCH_THRESHOLD`] is treated as "no such player".

use strsim::normalized_levenshtein;

/// Minimum 0-100 similarity score for a candidate to count as a match
pub const MATCH_THRESHOLD: u8 = 30;

/// Scores one candidate against the query, 0-100
///
/// Comparison is case-insensitive; "virat kohli" matches "Virat Kohli"
/// with a perfect score.
pub fn similarity(query: &str, candidate: &str) -> u8 {
    let ratio = normalized_levenshtein(&query.to_lowercase(), &candidate.to_lowercase());
    (ratio * 100.0).round() as u8
}

/// Finds the best-scoring candidate at or above the match threshold
///
/// # Arguments
///
/// * `query` - The (possibly misspelled) name being looked up
/// * `candidates` - The stored player names to match against
///
/// # Returns
///
/// The winning candidate and its score, or `None` when nothing clears
/// the threshold. Candidates are scanned in sorted order so that score
/// ties resolve the same way on every run.
pub fn find_best(query: &str, candidates: &[String]) -> Option<(String, u8)> {
    let mut sorted: Vec<&String> = candidates.iter().collect();
    sorted.sort();

    let mut best: Option<(&String, u8)> = None;
    for candidate in sorted {
        let score = similarity(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    match best {
        Some((name, score)) if score >= MATCH_THRESHOLD => Some((name.clone(), score)),
        _ => None,
    }
}
