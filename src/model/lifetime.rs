use indexmap::IndexMap;
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::{
    model::{
        round::score_scraped_round,
        rules::{ConfigError, RuleSetRepository},
        structures::player_score::{PlayerLifetimeRecord, PlayerRoundScore},
        ScoringError
    },
    stats::{
        provider::{StatFilter, StatsProvider},
        StatsError
    },
    utils::progress_utils::progress_bar
};

/// Any failure while driving the engine over a window of rounds.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Stats(#[from] StatsError)
}

/// Scores one round under its pinned rule-set version, retrieving exactly
/// the boards the rules reference.
pub fn score_pinned_round<P: StatsProvider>(
    repo: &RuleSetRepository,
    round: u32,
    provider: &P
) -> Result<Vec<PlayerRoundScore>, ProcessorError> {
    let rules = repo.rules_for_round(round)?;
    let filter = StatFilter::for_rules(rules);
    let stats = provider.round_stats(round, &filter)?;
    let scores = score_scraped_round(rules, stats)?;
    info!(round, players = scores.len(), "scored round");

    Ok(scores)
}

/// Combines per-round totals across a window of rounds into lifetime
/// records, ranked by lifetime total descending (name ascending on ties).
///
/// Rounds are independent and scored in parallel; the per-player
/// accumulation happens in a single reduction afterwards, so no scores are
/// lost to concurrent updates. A player absent from a round keeps a zero
/// score for it, and averages always divide by the window length: a
/// newcomer's average is diluted by rounds they missed, never computed
/// over a smaller divisor.
pub fn aggregate_rounds<P: StatsProvider + Sync>(
    repo: &RuleSetRepository,
    rounds: &[u32],
    provider: &P
) -> Result<Vec<PlayerLifetimeRecord>, ProcessorError> {
    let bar = progress_bar(rounds.len() as u64, "Scoring rounds");

    let per_round: Vec<(u32, Vec<PlayerRoundScore>)> = rounds
        .par_iter()
        .map(|&round| {
            let scores = score_pinned_round(repo, round, provider)?;
            bar.inc(1);
            Ok((round, scores))
        })
        .collect::<Result<_, ProcessorError>>()?;
    bar.finish();

    let mut records: IndexMap<String, PlayerLifetimeRecord> = IndexMap::new();
    for (round, scores) in per_round {
        for score in scores {
            records
                .entry(score.player.clone())
                .or_insert_with(|| PlayerLifetimeRecord::new(score.player.clone(), rounds))
                .add_round_score(round, score.total);
        }
    }

    let mut ranked: Vec<PlayerLifetimeRecord> = records.into_values().collect();
    ranked.sort_by(|a, b| {
        b.total_score()
            .total_cmp(&a.total_score())
            .then_with(|| a.player.cmp(&b.player))
    });

    Ok(ranked)
}
