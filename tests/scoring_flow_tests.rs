use std::{collections::HashMap, env, fs, path::PathBuf};

use approx::assert_abs_diff_eq;
use rush_processor::{
    model::{
        constants::LAND_STAT,
        lifetime::{aggregate_rounds, score_pinned_round, ProcessorError}
    },
    stats::cache::RoundCache,
    utils::test_utils::{generate_round_stats, MemoryProvider}
};

mod common;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir()
        .join("rush-processor-tests")
        .join(format!("{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_round_flow_with_mixed_presence() {
    // p1 tops the spies board; the wizards board is all-tied, so both
    // players normalize to 1 there. The theft boards were never published
    // this round and score as absence.
    let repo = common::two_version_repository(&[51], &[]);
    let provider = MemoryProvider::new(HashMap::from([(
        51u32,
        generate_round_stats(&[
            ("Most Masterful Spies", &[("p1", 100), ("p2", 50)]),
            ("Most Masterful Wizards", &[("p1", 10), ("p2", 10)]),
        ])
    )]));

    let ranked = score_pinned_round(&repo, 51, &provider).unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].player, "p1");
    assert_abs_diff_eq!(ranked[0].components["Mastery"], 25.0);
    assert_abs_diff_eq!(ranked[0].components["Theft"], 0.0);
    assert_abs_diff_eq!(ranked[0].total, 25.0);
    assert_eq!(ranked[1].player, "p2");
    assert_abs_diff_eq!(ranked[1].components["Mastery"], 12.5);
    assert_abs_diff_eq!(ranked[1].total, 12.5);
}

#[test]
fn test_rule_version_pinned_per_round() {
    // "rogue" tops one theft board of three. Under v1 the category averages
    // over all three boards; under v2 it averages the best two, so the same
    // performance is worth more in the newer round.
    let theft_round = || {
        generate_round_stats(&[(
            "Top Platinum Thieves",
            &[("rogue", 100), ("mark", 10), ("zero", 0)]
        )])
    };
    let repo = common::two_version_repository(&[51], &[60]);
    let provider = MemoryProvider::new(HashMap::from([(51u32, theft_round()), (60, theft_round())]));

    let old = score_pinned_round(&repo, 51, &provider).unwrap();
    let new = score_pinned_round(&repo, 60, &provider).unwrap();

    let rogue_old = old.iter().find(|s| s.player == "rogue").unwrap();
    let rogue_new = new.iter().find(|s| s.player == "rogue").unwrap();
    assert_abs_diff_eq!(rogue_old.total, 3.333);
    assert_abs_diff_eq!(rogue_new.total, 5.0);

    // The lifetime window carries each round under its own version.
    let ranked = aggregate_rounds(&repo, &[60, 51], &provider).unwrap();
    let rogue = ranked.iter().find(|r| r.player == "rogue").unwrap();
    assert_eq!(rogue.round_score(51), Some(3.333));
    assert_eq!(rogue.round_score(60), Some(5.0));
    assert_abs_diff_eq!(rogue.total_score(), 8.333);
}

#[test]
fn test_small_land_penalty_from_the_land_board() {
    // v2 Mastery carries a 0.5 max penalty. "smallfry" sits at the round
    // minimum land and forfeits half the category; "bigdog" is at the
    // maximum and keeps it all.
    let repo = common::two_version_repository(&[], &[60]);
    let provider = MemoryProvider::new(HashMap::from([(
        60u32,
        generate_round_stats(&[
            ("Most Masterful Spies", &[("smallfry", 100), ("bigdog", 50)]),
            (LAND_STAT, &[("bigdog", 1000), ("smallfry", 100)]),
        ])
    )]));

    let ranked = score_pinned_round(&repo, 60, &provider).unwrap();

    let smallfry = ranked.iter().find(|s| s.player == "smallfry").unwrap();
    // Base (1.0 + 0.0) / 2 * 25 = 12.5, halved by the penalty.
    assert_abs_diff_eq!(smallfry.components["Mastery"], 6.25);
    assert_abs_diff_eq!(smallfry.total, 6.25);
    assert_eq!(smallfry.land_size, Some(100));

    let bigdog = ranked.iter().find(|s| s.player == "bigdog").unwrap();
    assert_abs_diff_eq!(bigdog.components["Mastery"], 0.0);
    assert_eq!(bigdog.land_size, Some(1000));
}

#[test]
fn test_cache_backed_window() {
    let cache = RoundCache::new(scratch_dir("cache-backed-window"));
    let repo = common::two_version_repository(&[51, 50], &[]);

    cache
        .store(
            51,
            &generate_round_stats(&[("Most Masterful Spies", &[("hero", 100), ("filler", 0)])])
        )
        .unwrap();
    cache
        .store(
            50,
            &generate_round_stats(&[("Most Masterful Spies", &[("filler", 10), ("other", 0)])])
        )
        .unwrap();

    let ranked = aggregate_rounds(&repo, &[51, 50], &cache).unwrap();

    let hero = ranked.iter().find(|r| r.player == "hero").unwrap();
    // (1.0 + 0.0) / 2 * 25 in the round played, zero in the one missed.
    assert_abs_diff_eq!(hero.total_score(), 12.5);
    assert_abs_diff_eq!(hero.average_score(), 6.25);
    assert_eq!(hero.round_score(50), Some(0.0));
}

#[test]
fn test_missing_cached_round_fails() {
    let cache = RoundCache::new(scratch_dir("missing-cached-round"));
    let repo = common::two_version_repository(&[51, 50], &[]);

    cache
        .store(
            51,
            &generate_round_stats(&[("Most Masterful Spies", &[("hero", 100), ("filler", 0)])])
        )
        .unwrap();

    let result = aggregate_rounds(&repo, &[51, 50], &cache);

    assert!(matches!(result, Err(ProcessorError::Stats(_))));
}
