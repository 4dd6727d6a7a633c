use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rush_processor::{
    args::{Args, Command},
    model::{
        lifetime::{aggregate_rounds, score_pinned_round},
        rules::RuleSetRepository
    },
    reports,
    stats::cache::RoundCache
};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let repo = RuleSetRepository::from_json_file(&args.config).expect("Expected a valid ranking configuration");
    let provider = RoundCache::new(args.cache_dir.clone());

    match args.command {
        Command::Round { round, components } => {
            let scores = score_pinned_round(&repo, round, &provider).expect("Expected round scoring to succeed");
            let path = reports::write_round_report(&args.out_dir, round, &scores, components)
                .expect("Expected to write the round report");

            info!(round, players = scores.len(), path = %path.display(), "round report written");
        }
        Command::Lifetime { last } => {
            let rounds = match last {
                Some(n) => repo.last_rounds(n),
                None => repo.rounds()
            };
            let records =
                aggregate_rounds(&repo, rounds, &provider).expect("Expected lifetime aggregation to succeed");
            let path = reports::write_lifetime_report(&args.out_dir, rounds, &records)
                .expect("Expected to write the lifetime report");

            info!(
                rounds = rounds.len(),
                players = records.len(),
                path = %path.display(),
                "lifetime report written"
            );
        }
    }
}
