use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf}
};

use itertools::Itertools;

use crate::model::structures::player_score::{PlayerLifetimeRecord, PlayerRoundScore};

/// Writes one round's ranked scores, one `player, total` line per player,
/// with the per-category breakdown appended when requested.
pub fn write_round_report(
    out_dir: &Path,
    round: u32,
    scores: &[PlayerRoundScore],
    with_components: bool
) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("rush_rankings_round_{round}.txt"));
    let mut out = BufWriter::new(File::create(&path)?);

    for score in scores {
        if with_components {
            writeln!(
                out,
                "{}, {}, {}",
                score.player,
                score.total,
                score.components.values().join(", ")
            )?;
        } else {
            writeln!(out, "{}, {}", score.player, score.total)?;
        }
    }
    out.flush()?;

    Ok(path)
}

/// Writes the lifetime ranking: `player,total,average` followed by the
/// per-round scores, newest round first.
pub fn write_lifetime_report(
    out_dir: &Path,
    rounds: &[u32],
    records: &[PlayerLifetimeRecord]
) -> io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let label = rounds.first().map(|nr| format!("r{nr}_")).unwrap_or_default();
    let path = out_dir.join(format!("rush_rankings_{label}last_{}_rounds.txt", rounds.len()));
    let mut out = BufWriter::new(File::create(&path)?);

    for record in records {
        writeln!(
            out,
            "{},{},{},{}",
            record.player,
            record.total_score(),
            record.average_score(),
            record.scores_text()
        )?;
    }
    out.flush()?;

    Ok(path)
}
