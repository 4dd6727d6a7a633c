use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::{
    normalizer::NormalizedRound,
    penalty::{apply_low_land_penalty, LandContext},
    rules::{RuleSet, ScoringCategory},
    structures::calculation::Calculation,
    ScoringError
};

/// Scores a round's categories for individual players, from the normalized
/// views and the round's land distribution.
pub struct CategoryScorer<'a> {
    rules: &'a RuleSet,
    normalized: &'a NormalizedRound,
    land: Option<&'a LandContext>
}

impl<'a> CategoryScorer<'a> {
    pub fn new(rules: &'a RuleSet, normalized: &'a NormalizedRound, land: Option<&'a LandContext>) -> Self {
        Self { rules, normalized, land }
    }

    /// Every category's contribution for one player, in rule-set order.
    pub fn score_components(&self, player: &str) -> Result<IndexMap<String, f64>, ScoringError> {
        let mut components = IndexMap::with_capacity(self.rules.len());
        for (name, category) in self.rules {
            components.insert(name.clone(), self.score_category(category, player)?);
        }

        Ok(components)
    }

    fn score_category(&self, category: &ScoringCategory, player: &str) -> Result<f64, ScoringError> {
        let mut contribution = self.base_score(category, player) * category.weight;

        if category.small_land_max_penalty > 0.0 {
            if let Some(land) = self.land {
                // Players without a published land size keep the
                // unpenalized contribution.
                if let Some(player_land) = land.land_of(player) {
                    contribution = apply_low_land_penalty(
                        contribution,
                        player_land,
                        land.min_land(),
                        land.max_land(),
                        category.small_land_max_penalty,
                        category.small_land_penalty_threshold
                    )?;
                }
            }
        }

        Ok(contribution)
    }

    /// The unweighted aggregate over the category's boards.
    fn base_score(&self, category: &ScoringCategory, player: &str) -> f64 {
        let present = category
            .rankings
            .iter()
            .filter_map(|stat| self.normalized.player_score(stat, category.scaling, player));

        match category.calculation {
            // Boards the player is missing from contribute nothing to the
            // sum but still count toward the divisor.
            Calculation::Average => present.sum::<f64>() / category.rankings.len() as f64,
            // The divisor stays at the configured k even when fewer boards
            // are present; sparse participation depresses the score.
            Calculation::AverageOfBestK(k) => {
                let best: f64 = present.sorted_by(|a, b| b.total_cmp(a)).take(k).sum();
                best / k as f64
            }
        }
    }
}
