/// How a category folds its boards' normalized scores into one value.
///
/// A closed set: configuration strings are resolved into these variants at
/// document load, so an unknown method can never reach the scoring path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    /// Mean over every configured board; boards the player is missing from
    /// contribute zero to the sum but still count toward the divisor.
    Average,
    /// Mean of the best `k` boards the player appears in. The divisor is
    /// the configured `k` even when fewer boards are present.
    AverageOfBestK(usize)
}
