use thiserror::Error;

pub mod cache;
pub mod provider;

/// Failures of the stats collaborators (the cache and any upstream
/// source).
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to access round data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed round data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("round {round} is not cached and no upstream source is configured")]
    NotCached { round: u32 }
}
