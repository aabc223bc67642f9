//! Optional semantic index over match records
//!
//! Every backend answers through one normalized [`IndexMatch`] shape, so
//! callers never branch on where a result came from. [`MemoryIndex`] is
//! the in-process cosine-similarity backend used for tests and offline
//! runs; a remote vector store would implement the same trait.

use crate::scrape::MatchRecord;

/// One normalized query hit, regardless of backend
#[derive(Debug, Clone, PartialEq)]
pub struct IndexMatch {
    /// Backend-assigned identifier for the stored entry
    pub id: String,
    /// Similarity score, higher is closer
    pub score: f64,
    /// The match record stored alongside the vector
    pub record: MatchRecord,
}

/// A vector index of match records
pub trait SemanticIndex {
    /// Stores or replaces an entry under the given id
    fn upsert(&mut self, id: &str, vector: Vec<f64>, record: MatchRecord);

    /// Returns the `top_k` closest entries to the query vector
    ///
    /// # Arguments
    ///
    /// * `vector` - The query embedding
    /// * `player_filter` - When set, only entries for this player are
    ///   considered
    /// * `top_k` - Maximum number of hits to return
    fn query(&self, vector: &[f64], player_filter: Option<&str>, top_k: usize) -> Vec<IndexMatch>;
}

/// Renders the sentence a match record embeds as
///
/// This is the canonical text form fed to whatever embedding model backs
/// the index, so that index contents stay comparable across backends.
pub fn match_text(record: &MatchRecord) -> String {
    let mut text = format!(
        "{} scored {} runs from {} balls against {} in a {} match on {}.",
        record.player_name,
        record.runs(),
        record.balls_faced(),
        record.opponent,
        record.format,
        record.date,
    );

    if let Some(bowling) = &record.bowling {
        text.push_str(&format!(
            " Took {} wickets conceding {} runs.",
            bowling.wickets, bowling.runs_conceded
        ));
    }

    text
}

/// In-memory cosine-similarity index
#[derive(Debug, Default)]
pub struct MemoryIndex {
    entries: Vec<(String, Vec<f64>, MatchRecord)>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SemanticIndex for MemoryIndex {
    fn upsert(&mut self, id: &str, vector: Vec<f64>, record: MatchRecord) {
        if let Some(entry) = self.entries.iter_mut().find(|(eid, _, _)| eid == id) {
            entry.1 = vector;
            entry.2 = record;
        } else {
            self.entries.push((id.to_string(), vector, record));
        }
    }

    fn query(&self, vector: &[f64], player_filter: Option<&str>, top_k: usize) -> Vec<IndexMatch> {
        let mut hits: Vec<IndexMatch> = self
            .entries
            .iter()
            .filter(|(_, _, record)| {
                player_filter.map_or(true, |player| record.player_name == player)
            })
            .map(|(id, stored, record)| IndexMatch {
                id: id.clone(),
                score: cosine_similarity(vector, stored),
                record: record.clone(),
            })
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);
        hits
    }
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
