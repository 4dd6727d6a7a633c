use rush_processor::model::rules::{RankingDocument, RuleSetRepository};
use serde_json::json;

/// A two-version repository shaped like the production document: v1 is the
/// original flat-average rules, v2 narrows Theft to best-k and adds a
/// small-land penalty on Mastery.
pub fn two_version_repository(v1_rounds: &[u32], v2_rounds: &[u32]) -> RuleSetRepository {
    let mut rounds = Vec::new();
    for nr in v2_rounds {
        rounds.push(json!({ "round": nr, "version": "v2" }));
    }
    for nr in v1_rounds {
        rounds.push(json!({ "round": nr, "version": "v1" }));
    }

    let doc: RankingDocument = serde_json::from_value(json!({
        "versions": {
            "v1": {
                "Mastery": {
                    "rankings": ["Most Masterful Spies", "Most Masterful Wizards"],
                    "calculation": "average",
                    "weight": 25.0
                },
                "Theft": {
                    "rankings": ["Top Platinum Thieves", "Top Food Thieves", "Top Ore Thieves"],
                    "calculation": "average",
                    "weight": 10.0
                }
            },
            "v2": {
                "Mastery": {
                    "rankings": ["Most Masterful Spies", "Most Masterful Wizards"],
                    "calculation": "average",
                    "weight": 25.0,
                    "small_land_max_penalty": 0.5
                },
                "Theft": {
                    "rankings": ["Top Platinum Thieves", "Top Food Thieves", "Top Ore Thieves"],
                    "calculation": "average-of-best-k",
                    "best_k": 2,
                    "weight": 10.0
                }
            }
        },
        "rounds": rounds
    }))
    .expect("test document should deserialize");

    RuleSetRepository::from_document(doc).expect("test document should validate")
}
