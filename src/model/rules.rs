use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::model::structures::{calculation::Calculation, scaling_style::ScalingStyle};

const CALC_AVERAGE: &str = "average";
const CALC_AVERAGE_OF_BEST_K: &str = "average-of-best-k";

/// One named contribution to the total score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringCategory {
    /// Stat names feeding this category, in document order.
    pub rankings: Vec<String>,
    pub calculation: Calculation,
    /// The category's maximum possible contribution.
    pub weight: f64,
    pub scaling: ScalingStyle,
    /// Fraction of the contribution forfeited at the round-minimum land
    /// size; zero disables the penalty.
    pub small_land_max_penalty: f64,
    /// Land size at which the penalty vanishes; the round maximum when
    /// absent.
    pub small_land_penalty_threshold: Option<u64>
}

/// One version of the scoring rules, category name to category, in
/// document order.
pub type RuleSet = IndexMap<String, ScoringCategory>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read ranking configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed ranking configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("category '{category}': unknown calculation method '{name}'")]
    UnknownCalculation { category: String, name: String },

    #[error("category '{category}': calculation 'average-of-best-k' requires best_k")]
    MissingBestK { category: String },

    #[error("category '{category}': best_k must lie between 1 and the number of rankings ({rankings}), got {best_k}")]
    InvalidBestK {
        category: String,
        best_k: usize,
        rankings: usize
    },

    #[error("category '{category}': rankings must not be empty")]
    EmptyRankings { category: String },

    #[error("category '{category}': weight must not be negative, got {weight}")]
    NegativeWeight { category: String, weight: f64 },

    #[error("category '{category}': small_land_max_penalty must lie in [0, 1], got {penalty}")]
    PenaltyOutOfRange { category: String, penalty: f64 },

    #[error("round {round} is pinned to unknown rule-set version '{version}'")]
    UnknownVersion { round: u32, version: String },

    #[error("round {round} is pinned more than once")]
    DuplicatePin { round: u32 },

    #[error("no rule-set version is pinned for round {round}")]
    UnpinnedRound { round: u32 }
}

/// A category as written in the configuration document. Resolved into a
/// [`ScoringCategory`] before any scoring happens.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub rankings: Vec<String>,
    pub calculation: String,
    #[serde(default)]
    pub best_k: Option<usize>,
    pub weight: f64,
    #[serde(default)]
    pub scaling: ScalingStyle,
    #[serde(default)]
    pub small_land_max_penalty: Option<f64>,
    #[serde(default)]
    pub small_land_penalty_threshold: Option<u64>
}

/// Pins one historical round to a rule-set version.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundPin {
    pub round: u32,
    pub version: String
}

/// The parsed ranking configuration: every rule-set version plus the round
/// pin table.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingDocument {
    pub versions: IndexMap<String, IndexMap<String, RawCategory>>,
    pub rounds: Vec<RoundPin>
}

fn resolve_category(name: &str, raw: RawCategory) -> Result<ScoringCategory, ConfigError> {
    if raw.rankings.is_empty() {
        return Err(ConfigError::EmptyRankings {
            category: name.to_owned()
        });
    }
    if raw.weight < 0.0 {
        return Err(ConfigError::NegativeWeight {
            category: name.to_owned(),
            weight: raw.weight
        });
    }

    let calculation = match raw.calculation.as_str() {
        CALC_AVERAGE => Calculation::Average,
        CALC_AVERAGE_OF_BEST_K => {
            let best_k = raw.best_k.ok_or_else(|| ConfigError::MissingBestK {
                category: name.to_owned()
            })?;
            if best_k == 0 || best_k > raw.rankings.len() {
                return Err(ConfigError::InvalidBestK {
                    category: name.to_owned(),
                    best_k,
                    rankings: raw.rankings.len()
                });
            }
            Calculation::AverageOfBestK(best_k)
        }
        other => {
            return Err(ConfigError::UnknownCalculation {
                category: name.to_owned(),
                name: other.to_owned()
            })
        }
    };

    let small_land_max_penalty = raw.small_land_max_penalty.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&small_land_max_penalty) {
        return Err(ConfigError::PenaltyOutOfRange {
            category: name.to_owned(),
            penalty: small_land_max_penalty
        });
    }

    Ok(ScoringCategory {
        rankings: raw.rankings,
        calculation,
        weight: raw.weight,
        scaling: raw.scaling,
        small_land_max_penalty,
        small_land_penalty_threshold: raw.small_land_penalty_threshold
    })
}

/// Every rule-set version plus the round pin table, built once at startup.
/// All configuration problems surface here, before any round is scored.
#[derive(Debug, Clone)]
pub struct RuleSetRepository {
    versions: IndexMap<String, RuleSet>,
    pins: HashMap<u32, String>,
    rounds: Vec<u32>
}

impl RuleSetRepository {
    pub fn from_document(doc: RankingDocument) -> Result<Self, ConfigError> {
        let mut versions = IndexMap::with_capacity(doc.versions.len());
        for (version, categories) in doc.versions {
            let mut rule_set = RuleSet::with_capacity(categories.len());
            for (name, raw) in categories {
                let category = resolve_category(&name, raw)?;
                rule_set.insert(name, category);
            }
            versions.insert(version, rule_set);
        }

        let mut pins = HashMap::with_capacity(doc.rounds.len());
        let mut rounds = Vec::with_capacity(doc.rounds.len());
        for pin in doc.rounds {
            if !versions.contains_key(&pin.version) {
                return Err(ConfigError::UnknownVersion {
                    round: pin.round,
                    version: pin.version
                });
            }
            if pins.insert(pin.round, pin.version).is_some() {
                return Err(ConfigError::DuplicatePin { round: pin.round });
            }
            rounds.push(pin.round);
        }
        rounds.sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self { versions, pins, rounds })
    }

    /// Loads and validates a JSON ranking document.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let doc: RankingDocument = serde_json::from_reader(BufReader::new(file))?;

        Self::from_document(doc)
    }

    /// The rule set pinned for a historical round.
    pub fn rules_for_round(&self, round: u32) -> Result<&RuleSet, ConfigError> {
        let version = self.pins.get(&round).ok_or(ConfigError::UnpinnedRound { round })?;

        self.versions.get(version).ok_or_else(|| ConfigError::UnknownVersion {
            round,
            version: version.clone()
        })
    }

    /// Every known round, newest first.
    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    /// The `n` most recent rounds, or all of them when fewer are known.
    pub fn last_rounds(&self, n: usize) -> &[u32] {
        &self.rounds[..n.min(self.rounds.len())]
    }
}
