use std::collections::HashSet;

use crate::{
    model::{constants::LAND_STAT, rules::RuleSet, structures::leaderboard::RoundStats},
    stats::StatsError
};

/// Explicit allow-list of stat names to retrieve for a round.
///
/// Derived from a rule set instead of keyword matching on stat names, so a
/// rule change is the only thing that can change what gets retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFilter {
    names: HashSet<String>
}

impl StatFilter {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect()
        }
    }

    /// Every board the rule set scores, plus the land-size board.
    pub fn for_rules(rules: &RuleSet) -> Self {
        let mut names: HashSet<String> = rules
            .values()
            .flat_map(|category| category.rankings.iter().cloned())
            .collect();
        names.insert(LAND_STAT.to_owned());

        Self { names }
    }

    pub fn includes(&self, stat: &str) -> bool {
        self.names.contains(stat)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Source of raw per-round leaderboard data. Network retrieval and page
/// parsing live behind this trait, outside the scoring engine.
pub trait StatsProvider {
    fn round_stats(&self, round: u32, filter: &StatFilter) -> Result<RoundStats, StatsError>;
}
