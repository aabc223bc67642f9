//! Fuzzy player lookup over stored aggregates

mod fuzzy;
mod service;

pub use fuzzy::{find_best, similarity, MATCH_THRESHOLD};
pub use service::{
    list_players, lookup_player, PlayerCredit, PlayerList, PlayerLookup, PlayerSummary,
};
