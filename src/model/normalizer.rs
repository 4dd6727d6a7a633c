use std::collections::HashMap;

use indexmap::IndexMap;
use itertools::{Itertools, MinMaxResult};

use crate::model::{
    constants::{LOG_POWER_EXPONENT, NORMALIZED_HIGH, NORMALIZED_LOW},
    rules::RuleSet,
    structures::{
        leaderboard::{Leaderboard, RoundStats},
        scaling_style::ScalingStyle
    }
};

/// Derived view over one board: player name to normalized score.
pub type NormalizedScores = IndexMap<String, f64>;

/// Rescales a board's raw scores into `[low, high]`.
///
/// The minimum raw score maps to `low` and the maximum to `high`. A board
/// with no spread (single entrant or all tied) maps every entry to `high`:
/// everyone did equally best. All styles are monotonic non-decreasing in
/// the raw score, so rank order within the board is preserved and raw ties
/// stay tied.
pub fn normalize(board: &Leaderboard, style: ScalingStyle, low: f64, high: f64) -> NormalizedScores {
    let mut scaled = NormalizedScores::with_capacity(board.len());
    let (min, max) = match board.values().map(|e| e.raw_score).minmax() {
        MinMaxResult::NoElements => return scaled,
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::MinMax(min, max) => (min, max)
    };

    for entry in board.values() {
        let value = if min == max {
            high
        } else {
            low + fraction(entry.raw_score, min, max, style) * (high - low)
        };
        scaled.insert(entry.player.clone(), value);
    }

    scaled
}

/// Position of `raw` within `[min, max]` as a fraction of the spread,
/// shaped by the scaling style. Requires `min < max`.
fn fraction(raw: u64, min: u64, max: u64, style: ScalingStyle) -> f64 {
    let offset = (raw - min) as f64;
    let span = (max - min) as f64;

    match style {
        ScalingStyle::Linear => offset / span,
        // ln(1 + offset) is well-defined: the argument is at least 1.
        ScalingStyle::Log => (1.0 + offset).ln() / (1.0 + span).ln(),
        ScalingStyle::Power => {
            let t = offset / span;
            t * t
        }
        ScalingStyle::LogPower => {
            let u = (1.0 + offset).ln() / (1.0 + span).ln();
            u.powf(LOG_POWER_EXPONENT)
        }
    }
}

/// Normalized views for one round, one per `(stat, style)` pair the rule
/// set references.
///
/// A board shared by categories with different styles gets a separate view
/// per style, and the raw round data is never written to, so a cached
/// round can be scored any number of times without scaling twice. Boards a
/// rule references but the round never published produce no view.
pub struct NormalizedRound {
    views: HashMap<String, HashMap<ScalingStyle, NormalizedScores>>
}

impl NormalizedRound {
    pub fn build(rules: &RuleSet, stats: &RoundStats) -> Self {
        let mut views: HashMap<String, HashMap<ScalingStyle, NormalizedScores>> = HashMap::new();

        for category in rules.values() {
            for stat in &category.rankings {
                let Some(board) = stats.get(stat) else {
                    continue;
                };
                views
                    .entry(stat.clone())
                    .or_default()
                    .entry(category.scaling)
                    .or_insert_with(|| normalize(board, category.scaling, NORMALIZED_LOW, NORMALIZED_HIGH));
            }
        }

        Self { views }
    }

    /// The view for one board under one style, `None` when the board was
    /// absent from the round.
    pub fn view(&self, stat: &str, style: ScalingStyle) -> Option<&NormalizedScores> {
        self.views.get(stat)?.get(&style)
    }

    /// A player's normalized score on one board; `None` when either the
    /// board or the player is missing.
    pub fn player_score(&self, stat: &str, style: ScalingStyle, player: &str) -> Option<f64> {
        self.view(stat, style)?.get(player).copied()
    }
}
