use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind},
    path::PathBuf
};

use tracing::debug;

use crate::{
    model::structures::leaderboard::RoundStats,
    stats::{
        provider::{StatFilter, StatsProvider},
        StatsError
    }
};

/// On-disk cache of retrieved round data, one JSON file per round.
pub struct RoundCache {
    dir: PathBuf
}

impl RoundCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn round_path(&self, round: u32) -> PathBuf {
        self.dir.join(format!("round_{round}.json"))
    }

    /// The cached stats for a round, `None` when the round was never
    /// stored.
    pub fn load(&self, round: u32) -> Result<Option<RoundStats>, StatsError> {
        let path = self.round_path(round);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into())
        };

        let stats = serde_json::from_reader(BufReader::new(file))?;
        debug!(round, path = %path.display(), "loaded cached round");

        Ok(Some(stats))
    }

    pub fn store(&self, round: u32, stats: &RoundStats) -> Result<(), StatsError> {
        fs::create_dir_all(&self.dir)?;
        let file = File::create(self.round_path(round))?;
        serde_json::to_writer(BufWriter::new(file), stats)?;

        Ok(())
    }
}

impl StatsProvider for RoundCache {
    /// Serves cached rounds only. A missing round is an error rather than
    /// an empty result, so a half-populated cache cannot silently produce
    /// zero scores.
    fn round_stats(&self, round: u32, filter: &StatFilter) -> Result<RoundStats, StatsError> {
        let mut stats = self.load(round)?.ok_or(StatsError::NotCached { round })?;
        stats.retain(|stat, _| filter.includes(stat));

        Ok(stats)
    }
}

/// Cache-through decorator: hits serve from disk, misses delegate to the
/// inner provider and store what it returns.
pub struct CachedProvider<P> {
    cache: RoundCache,
    inner: P
}

impl<P> CachedProvider<P> {
    pub fn new(cache: RoundCache, inner: P) -> Self {
        Self { cache, inner }
    }
}

impl<P: StatsProvider> StatsProvider for CachedProvider<P> {
    fn round_stats(&self, round: u32, filter: &StatFilter) -> Result<RoundStats, StatsError> {
        if let Some(mut stats) = self.cache.load(round)? {
            stats.retain(|stat, _| filter.includes(stat));
            return Ok(stats);
        }

        let stats = self.inner.round_stats(round, filter)?;
        self.cache.store(round, &stats)?;

        Ok(stats)
    }
}
