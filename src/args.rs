use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Clone)]
#[command(
    display_name = "Rush Processor",
    author = "Rush Rankings",
    long_about = "Computes the Rush Rankings from published round leaderboards"
)]
pub struct Args {
    /// Ranking configuration document: every rule-set version plus the
    /// round-to-version pin table.
    #[arg(short, long, env = "RUSH_CONFIG", default_value = "config/rankings.json")]
    pub config: PathBuf,

    /// Directory holding retrieved round data, one JSON file per round.
    #[arg(long, env = "RUSH_CACHE_DIR", default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Directory the reports are written to.
    #[arg(short, long, env = "RUSH_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Scores a single round and writes its ranked report.
    Round {
        /// Round number to score.
        round: u32,

        /// Append the per-category breakdown to every line.
        #[arg(long)]
        components: bool
    },
    /// Aggregates lifetime scores across the known rounds.
    Lifetime {
        /// Restrict the window to the most recent N rounds.
        #[arg(long)]
        last: Option<usize>
    }
}
