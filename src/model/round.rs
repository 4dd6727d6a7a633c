use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::model::{
    category::CategoryScorer,
    constants::{BOT_PLAYER, LAND_STAT},
    normalizer::NormalizedRound,
    penalty::LandContext,
    round_score,
    rules::RuleSet,
    structures::{
        leaderboard::{Leaderboard, RoundStats},
        player_score::PlayerRoundScore
    },
    ScoringError
};

/// Union of player names across every board of the round, minus the
/// placeholder identity.
pub fn participants(stats: &RoundStats) -> BTreeSet<String> {
    stats
        .values()
        .flat_map(|board| board.keys())
        .filter(|name| name.as_str() != BOT_PLAYER)
        .cloned()
        .collect()
}

/// Land sizes published on a land board, restricted to the given
/// participant set.
pub fn land_sizes(board: &Leaderboard, participants: &BTreeSet<String>) -> HashMap<String, u64> {
    board
        .values()
        .filter(|entry| participants.contains(&entry.player))
        .map(|entry| (entry.player.clone(), entry.raw_score))
        .collect()
}

/// Scores every participant of one round and ranks them.
///
/// Ranking is by total score descending; equal totals order by player name
/// ascending, so identical inputs always produce identical output.
pub fn score_round(
    rules: &RuleSet,
    stats: &RoundStats,
    land_sizes: &HashMap<String, u64>
) -> Result<Vec<PlayerRoundScore>, ScoringError> {
    let normalized = NormalizedRound::build(rules, stats);
    let land = LandContext::new(land_sizes.clone());
    let scorer = CategoryScorer::new(rules, &normalized, land.as_ref());

    let mut scores = Vec::new();
    for player in participants(stats) {
        let components = scorer.score_components(&player)?;
        let total = round_score(components.values().sum());
        let land_size = land_sizes.get(&player).copied();
        scores.push(PlayerRoundScore {
            player,
            total,
            components,
            land_size
        });
    }

    scores.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.player.cmp(&b.player)));

    Ok(scores)
}

/// Scores a round straight from retrieved stats: the land board is split
/// off as penalty input and everything else is scored.
pub fn score_scraped_round(rules: &RuleSet, mut stats: RoundStats) -> Result<Vec<PlayerRoundScore>, ScoringError> {
    let land_board = stats.shift_remove(LAND_STAT);
    let names = participants(&stats);
    let sizes = land_board
        .as_ref()
        .map(|board| land_sizes(board, &names))
        .unwrap_or_default();

    debug!(participants = names.len(), boards = stats.len(), "scoring round");
    score_round(rules, &stats, &sizes)
}
