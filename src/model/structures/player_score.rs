use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::round_score;

/// A player's total and per-category breakdown for one scored round.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRoundScore {
    pub player: String,
    /// Rounded sum of the per-category contributions.
    pub total: f64,
    /// Contribution per category, in rule-set order.
    pub components: IndexMap<String, f64>,
    pub land_size: Option<u64>
}

/// One player's score across a fixed window of rounds.
///
/// Every round of the window starts at zero; rounds the player missed stay
/// there, so the average is diluted by absence rather than dividing by a
/// smaller count. Totals and averages are rounded only at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLifetimeRecord {
    pub player: String,
    round_scores: IndexMap<u32, f64>
}

impl PlayerLifetimeRecord {
    pub fn new(player: impl Into<String>, rounds: &[u32]) -> Self {
        Self {
            player: player.into(),
            round_scores: rounds.iter().map(|&nr| (nr, 0.0)).collect()
        }
    }

    /// Records the player's score for one round. Rounds outside the window
    /// are ignored.
    pub fn add_round_score(&mut self, round: u32, score: f64) {
        if let Some(slot) = self.round_scores.get_mut(&round) {
            *slot = score;
        }
    }

    pub fn round_score(&self, round: u32) -> Option<f64> {
        self.round_scores.get(&round).copied()
    }

    pub fn window_len(&self) -> usize {
        self.round_scores.len()
    }

    /// Rounded sum over the whole window.
    pub fn total_score(&self) -> f64 {
        round_score(self.round_scores.values().sum())
    }

    /// Total divided by the window length, never by rounds actually played.
    pub fn average_score(&self) -> f64 {
        round_score(self.total_score() / self.round_scores.len() as f64)
    }

    /// Per-round scores as a comma-joined line, newest round first.
    pub fn scores_text(&self) -> String {
        self.round_scores
            .keys()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .map(|nr| format!("{}", round_score(self.round_scores[nr])))
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::model::structures::player_score::PlayerLifetimeRecord;

    #[test]
    fn test_window_total_and_average() {
        // Present in 3 of 5 requested rounds; the average still divides by 5.
        let mut record = PlayerLifetimeRecord::new("AgFx", &[5, 4, 3, 2, 1]);
        record.add_round_score(5, 10.0);
        record.add_round_score(3, 20.0);
        record.add_round_score(1, 5.0);

        assert_abs_diff_eq!(record.total_score(), 35.0);
        assert_abs_diff_eq!(record.average_score(), 7.0);
    }

    #[test]
    fn test_unplayed_rounds_stay_zero() {
        let record = PlayerLifetimeRecord::new("AgFx", &[3, 2, 1]);

        assert_eq!(record.round_score(2), Some(0.0));
        assert_abs_diff_eq!(record.total_score(), 0.0);
        assert_abs_diff_eq!(record.average_score(), 0.0);
    }

    #[test]
    fn test_round_outside_window_ignored() {
        let mut record = PlayerLifetimeRecord::new("AgFx", &[2, 1]);
        record.add_round_score(9, 100.0);

        assert_eq!(record.round_score(9), None);
        assert_abs_diff_eq!(record.total_score(), 0.0);
        assert_eq!(record.window_len(), 2);
    }

    #[test]
    fn test_scores_text_newest_round_first() {
        let mut record = PlayerLifetimeRecord::new("AgFx", &[1, 3, 2]);
        record.add_round_score(1, 1.5);
        record.add_round_score(2, 2.25);
        record.add_round_score(3, 3.125);

        assert_eq!(record.scores_text(), "3.125,2.25,1.5");
    }

    #[test]
    fn test_total_rounds_at_read_time() {
        let mut record = PlayerLifetimeRecord::new("AgFx", &[2, 1]);
        record.add_round_score(2, 0.0004);
        record.add_round_score(1, 0.0004);

        // Raw per-round values are kept; only the read is rounded.
        assert_abs_diff_eq!(record.total_score(), 0.001);
    }
}
