use std::collections::HashMap;

use crate::model::ScoringError;

/// Land sizes of a round's participants together with the population
/// bounds the penalty curve is evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct LandContext {
    sizes: HashMap<String, u64>,
    min_land: u64,
    max_land: u64
}

impl LandContext {
    /// `None` when no land sizes are known for the round.
    pub fn new(sizes: HashMap<String, u64>) -> Option<Self> {
        let min_land = sizes.values().copied().min()?;
        let max_land = sizes.values().copied().max()?;

        Some(Self { sizes, min_land, max_land })
    }

    pub fn land_of(&self, player: &str) -> Option<u64> {
        self.sizes.get(player).copied()
    }

    pub fn min_land(&self) -> u64 {
        self.min_land
    }

    pub fn max_land(&self) -> u64 {
        self.max_land
    }
}

/// Attenuates `score` for players who achieved it from a small land base.
///
/// The multiplier is `1 - max_penalty * (1 - sqrt(land_ratio))`, concave in
/// land size: the full penalty applies only at the exact round minimum,
/// shrinks quickly as land grows away from it, and vanishes at or above the
/// threshold (the round maximum when no threshold is configured).
///
/// `max_penalty == 0` is the disabled state and returns `score` unchanged
/// before any validation runs. The remaining invalid inputs each surface as
/// their own [`ScoringError`]; they mean the round data is broken, so they
/// are never silently clamped.
pub fn apply_low_land_penalty(
    score: f64,
    player_land: u64,
    min_land: u64,
    max_land: u64,
    max_penalty: f64,
    threshold: Option<u64>
) -> Result<f64, ScoringError> {
    if max_penalty == 0.0 {
        return Ok(score);
    }
    if max_penalty < 0.0 {
        return Err(ScoringError::NegativeMaxPenalty(max_penalty));
    }

    let effective_max = threshold.unwrap_or(max_land);
    if player_land >= effective_max {
        return Ok(score);
    }

    if effective_max < min_land {
        return Err(ScoringError::LandBoundsInverted { effective_max, min_land });
    }
    if effective_max == min_land {
        return Err(ScoringError::LandBoundsDegenerate(min_land));
    }
    if player_land < min_land {
        return Err(ScoringError::PlayerLandBelowMinimum { player_land, min_land });
    }

    let land_ratio = (player_land - min_land) as f64 / (effective_max - min_land) as f64;
    let multiplier = 1.0 - max_penalty * (1.0 - land_ratio.sqrt());

    Ok(score * multiplier)
}
