pub mod check;
pub mod placement;

pub use check::check_result;
pub use placement::{calculate_leaderboard_places, PlacementCalculator};
