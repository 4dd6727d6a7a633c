use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    model::{
        rules::{RuleSet, ScoringCategory},
        structures::{
            calculation::Calculation,
            leaderboard::{Leaderboard, LeaderboardEntry, RoundStats},
            scaling_style::ScalingStyle
        }
    },
    stats::{
        provider::{StatFilter, StatsProvider},
        StatsError
    }
};

/// Builds a board from `(player, raw_score)` pairs, ranked by raw score
/// descending.
pub fn generate_leaderboard(entries: &[(&str, u64)]) -> Leaderboard {
    let mut ordered: Vec<(&str, u64)> = entries.to_vec();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));

    let mut board = Leaderboard::with_capacity(ordered.len());
    for (position, (player, raw_score)) in ordered.into_iter().enumerate() {
        board.insert(
            player.to_owned(),
            LeaderboardEntry {
                rank: position as u32 + 1,
                player: player.to_owned(),
                raw_score
            }
        );
    }

    board
}

pub fn generate_round_stats(boards: &[(&str, &[(&str, u64)])]) -> RoundStats {
    boards
        .iter()
        .map(|(stat, entries)| ((*stat).to_owned(), generate_leaderboard(entries)))
        .collect()
}

/// A linear, penalty-free category over the given boards.
pub fn generate_category(rankings: &[&str], calculation: Calculation, weight: f64) -> ScoringCategory {
    ScoringCategory {
        rankings: rankings.iter().map(|stat| (*stat).to_owned()).collect(),
        calculation,
        weight,
        scaling: ScalingStyle::Linear,
        small_land_max_penalty: 0.0,
        small_land_penalty_threshold: None
    }
}

pub fn generate_rules(categories: &[(&str, ScoringCategory)]) -> RuleSet {
    categories
        .iter()
        .map(|(name, category)| ((*name).to_owned(), category.clone()))
        .collect()
}

/// Seeded random round: `n_players` players spread over `n_stats` boards,
/// with a rule set pairing the boards into categories of alternating
/// calculations and scaling styles. Reproducible across runs.
pub fn generate_random_round(n_players: usize, n_stats: usize, seed: u64) -> (RuleSet, RoundStats) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let players: Vec<String> = (0..n_players).map(|i| format!("player-{i}")).collect();
    let stats: Vec<String> = (0..n_stats).map(|i| format!("stat-{i}")).collect();

    let mut round = RoundStats::with_capacity(n_stats);
    for stat in &stats {
        let mut entries: Vec<(&str, u64)> = players
            .iter()
            .filter_map(|player| {
                if rng.random_bool(0.7) {
                    Some((player.as_str(), rng.random_range(1..100_000)))
                } else {
                    None
                }
            })
            .collect();
        if entries.is_empty() {
            entries.push((players[0].as_str(), rng.random_range(1..100_000)));
        }
        round.insert(stat.clone(), generate_leaderboard(&entries));
    }

    let styles = [
        ScalingStyle::Linear,
        ScalingStyle::Log,
        ScalingStyle::Power,
        ScalingStyle::LogPower,
    ];
    let mut rules = RuleSet::new();
    for (i, pair) in stats.chunks(2).enumerate() {
        let rankings: Vec<String> = pair.to_vec();
        let calculation = if i % 2 == 0 {
            Calculation::Average
        } else {
            Calculation::AverageOfBestK(rankings.len().min(2))
        };
        rules.insert(
            format!("category-{i}"),
            ScoringCategory {
                rankings,
                calculation,
                weight: 10.0 + i as f64,
                scaling: styles[i % styles.len()],
                small_land_max_penalty: 0.0,
                small_land_penalty_threshold: None
            }
        );
    }

    (rules, round)
}

/// In-memory provider for tests: serves pre-built rounds and errors on
/// unknown ones like a cache miss would.
pub struct MemoryProvider {
    rounds: HashMap<u32, RoundStats>
}

impl MemoryProvider {
    pub fn new(rounds: HashMap<u32, RoundStats>) -> Self {
        Self { rounds }
    }
}

impl StatsProvider for MemoryProvider {
    fn round_stats(&self, round: u32, filter: &StatFilter) -> Result<RoundStats, StatsError> {
        let mut stats = self
            .rounds
            .get(&round)
            .cloned()
            .ok_or(StatsError::NotCached { round })?;
        stats.retain(|stat, _| filter.includes(stat));

        Ok(stats)
    }
}
