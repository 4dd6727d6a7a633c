use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One player's row in a single published ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub player: String,
    pub raw_score: u64
}

/// One ranking table, keyed by player name (unique within the table).
/// Insertion order follows the published rank order.
pub type Leaderboard = IndexMap<String, LeaderboardEntry>;

/// Every leaderboard retrieved for a single round, keyed by stat name.
pub type RoundStats = IndexMap<String, Leaderboard>;
