pub mod models;
pub mod config;
pub mod scoring;

pub use crate::config::Settings;
pub use crate::models::{LeaderboardError, MinScores, Placement, Result, Tier, UserScore};
pub use crate::scoring::{calculate_leaderboard_places, check_result, PlacementCalculator};
