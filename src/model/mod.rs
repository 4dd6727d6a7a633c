use thiserror::Error;

pub mod category;
pub mod constants;
pub mod lifetime;
pub mod normalizer;
pub mod penalty;
pub mod round;
pub mod rules;
pub mod structures;

/// Fatal scoring failures. These indicate a broken round-data invariant,
/// not a transient condition; configuration problems fail earlier, at
/// document load (see [`rules::ConfigError`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("max penalty must not be negative, got {0}")]
    NegativeMaxPenalty(f64),

    #[error("penalty threshold {effective_max} lies below the round minimum land size {min_land}")]
    LandBoundsInverted { effective_max: u64, min_land: u64 },

    #[error("cannot form a land ratio: minimum land size equals the penalty threshold ({0})")]
    LandBoundsDegenerate(u64),

    #[error("player land size {player_land} lies below the round minimum {min_land}")]
    PlayerLandBelowMinimum { player_land: u64, min_land: u64 }
}

/// Rounds to the precision kept in totals and reports.
pub fn round_score(value: f64) -> f64 {
    let scale = 10f64.powi(constants::SCORE_PRECISION);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::model::round_score;

    #[test]
    fn test_round_score() {
        assert_abs_diff_eq!(round_score(1.23456), 1.235);
        assert_abs_diff_eq!(round_score(1.2344), 1.234);
        assert_abs_diff_eq!(round_score(-1.2346), -1.235);
        assert_abs_diff_eq!(round_score(10.0), 10.0);
    }
}
