// Scoring constants
pub const SCORE_PRECISION: i32 = 3;
pub const NORMALIZED_LOW: f64 = 0.0;
pub const NORMALIZED_HIGH: f64 = 1.0;
// Exponent applied on top of the log fraction by the log-power style.
pub const LOG_POWER_EXPONENT: f64 = 1.5;
// Stat publishing every dominion's land size; input to the land penalty.
pub const LAND_STAT: &str = "The Largest Dominions";
// Placeholder identity appearing on published tables; never a participant.
pub const BOT_PLAYER: &str = "Bot";
