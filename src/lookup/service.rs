//! Player lookup service
//!
//! A thin query layer over storage: fuzzy-resolves a queried name to a
//! stored player and returns their rounded-up average credit. Responses
//! carry the HTTP status an outer transport would emit, but no transport
//! lives in this crate.

use crate::lookup::fuzzy::find_best;
use crate::storage::{Storage, StorageResult};
use serde::Serialize;

/// Successful player lookup body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCredit {
    pub player_name: String,
    pub credit_points: u64,
}

/// Outcome of a single-player lookup
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerLookup {
    /// A stored player matched the query
    Found(PlayerCredit),
    /// Nothing cleared the fuzzy match threshold
    NotFound,
}

impl PlayerLookup {
    /// HTTP status an outer transport would emit for this outcome
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::NotFound => 404,
        }
    }
}

/// One entry in the all-players listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player_name: String,
    pub total_matches: u64,
    pub avg_credit_points: f64,
}

/// Outcome of listing all known players
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerList {
    Found(Vec<PlayerSummary>),
    Empty,
}

impl PlayerList {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::Empty => 404,
        }
    }
}

/// Looks up one player's average credit by fuzzy name match
///
/// The queried name is matched against every stored player name; the
/// best match at or above the threshold wins. The returned credit is
/// the stored average rounded up to a whole number.
///
/// Storage failures propagate as errors (an outer transport would map
/// them to 500).
pub fn lookup_player<S: Storage>(storage: &S, query: &str) -> StorageResult<PlayerLookup> {
    let names = storage.player_names()?;

    let Some((matched, score)) = find_best(query, &names) else {
        tracing::debug!(query = %query, "no player cleared the fuzzy match threshold");
        return Ok(PlayerLookup::NotFound);
    };

    let Some(aggregate) = storage.get_aggregate(&matched)? else {
        // Name came from the aggregates table, so this only happens if
        // the row was deleted between the two reads.
        return Ok(PlayerLookup::NotFound);
    };

    tracing::debug!(query = %query, matched = %matched, score, "fuzzy lookup resolved");

    Ok(PlayerLookup::Found(PlayerCredit {
        player_name: matched,
        credit_points: aggregate.average_credit.ceil() as u64,
    }))
}

/// Lists every player with stored aggregates, sorted by name
pub fn list_players<S: Storage>(storage: &S) -> StorageResult<PlayerList> {
    let aggregates = storage.all_aggregates()?;
    if aggregates.is_empty() {
        return Ok(PlayerList::Empty);
    }

    let entries = aggregates
        .into_iter()
        .map(|(name, aggregate)| PlayerSummary {
            player_name: name,
            total_matches: aggregate.total_matches,
            avg_credit_points: aggregate.average_credit,
        })
        .collect();

    Ok(PlayerList::Found(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::PlayerAggregate;
    use crate::storage::SqliteStorage;

    fn seeded_storage() -> SqliteStorage {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        storage
            .upsert_aggregate(
                "Virat Kohli",
                &PlayerAggregate {
                    total_matches: 10,
                    average_credit: 7.2,
                },
            )
            .unwrap();
        storage
            .upsert_aggregate(
                "Jasprit Bumrah",
                &PlayerAggregate {
                    total_matches: 8,
                    average_credit: 6.0,
                },
            )
            .unwrap();
        storage
    }

    #[test]
    fn test_lookup_exact_name() {
        let storage = seeded_storage();
        let result = lookup_player(&storage, "Virat Kohli").unwrap();

        match result {
            PlayerLookup::Found(body) => {
                assert_eq!(body.player_name, "Virat Kohli");
                // 7.2 rounds up to 8
                assert_eq!(body.credit_points, 8);
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_misspelled_name() {
        let storage = seeded_storage();
        let result = lookup_player(&storage, "virat kholi").unwrap();

        match result {
            PlayerLookup::Found(body) => assert_eq!(body.player_name, "Virat Kohli"),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_miss_is_404() {
        let storage = seeded_storage();
        let result = lookup_player(&storage, "qqqqqqqqqqqqqqqqqqqqqqqq").unwrap();
        assert_eq!(result, PlayerLookup::NotFound);
        assert_eq!(result.status_code(), 404);
    }

    #[test]
    fn test_whole_number_average_not_inflated() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        storage
            .upsert_aggregate(
                "Rohit Sharma",
                &PlayerAggregate {
                    total_matches: 4,
                    average_credit: 6.0,
                },
            )
            .unwrap();

        let result = lookup_player(&storage, "Rohit Sharma").unwrap();
        match result {
            PlayerLookup::Found(body) => assert_eq!(body.credit_points, 6),
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_list_players() {
        let storage = seeded_storage();
        let result = list_players(&storage).unwrap();
        assert_eq!(result.status_code(), 200);

        match result {
            PlayerList::Found(entries) => {
                assert_eq!(entries.len(), 2);
                // Sorted by name
                assert_eq!(entries[0].player_name, "Jasprit Bumrah");
                assert_eq!(entries[0].total_matches, 8);
                assert_eq!(entries[1].player_name, "Virat Kohli");
                assert!((entries[1].avg_credit_points - 7.2).abs() < f64::EPSILON);
            }
            other => panic!("expected player list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_players_empty_is_404() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        let result = list_players(&storage).unwrap();
        assert_eq!(result, PlayerList::Empty);
        assert_eq!(result.status_code(), 404);
    }

    #[test]
    fn test_credit_body_serializes() {
        let body = PlayerCredit {
            player_name: "Virat Kohli".to_string(),
            credit_points: 8,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"player_name":"Virat Kohli","credit_points":8}"#);
    }
}
