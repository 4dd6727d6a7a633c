//! Processor for the Rush Rankings of the OpenDominion game.
//!
//! The Rush Rankings honor players in a support role: the regular game
//! rankings only value the largest and most powerful dominions, while
//! these scores are built from the info-op and black-op leaderboards a
//! supporting player actually competes on. Raw per-category leaderboards
//! go through feature scaling, configurable per-category aggregation and
//! an optional small-land penalty, producing a weighted total per player
//! for each round and lifetime totals across a player's round history.

pub mod args;
pub mod model;
pub mod reports;
pub mod stats;
pub mod utils;
