use crate::models::{MinScores, Placement, Tier, UserScore};
use tracing::debug;

/// Assigns leaderboard places from scores and the three place thresholds.
///
/// Slots 1, 2 and 3 are reserved for the first, second and third tier
/// whether or not anyone reaches them. Extra qualifiers in a higher tier push
/// the numbers of the lower tiers up by the overflow, and everyone below the
/// third threshold is numbered from 4 onwards.
///
/// Inputs are trusted: scores are expected to be distinct and the thresholds
/// strictly decreasing. Nothing is validated here.
pub struct PlacementCalculator {
    min_scores: MinScores,
}

impl PlacementCalculator {
    pub fn new(min_scores: MinScores) -> Self {
        Self { min_scores }
    }

    /// Returns one placement per user, in descending score order.
    pub fn calculate(&self, users: &[UserScore]) -> Vec<Placement> {
        let mut ranked: Vec<&UserScore> = users.iter().collect();
        ranked.sort_by(|left, right| right.score.cmp(&left.score));

        let mut placements = Vec::with_capacity(ranked.len());
        // Users already given a tier place
        let mut place_offset: u32 = 0;

        for (index, user) in ranked.into_iter().enumerate() {
            let tier = self.min_scores.tier_for(user.score);
            let place = match tier {
                Tier::First => 1 + place_offset,
                Tier::Second => 2 + place_offset.saturating_sub(1),
                Tier::Third => 3 + place_offset.saturating_sub(2),
                Tier::Unplaced => 4 + (index as u32 - place_offset),
            };

            if tier.is_qualifier() {
                place_offset += 1;
            }

            debug!(
                user_id = %user.user_id,
                score = user.score,
                tier = tier.as_str(),
                place,
                "placed user"
            );

            placements.push(Placement {
                user_id: user.user_id.clone(),
                place,
            });
        }

        placements
    }
}

pub fn calculate_leaderboard_places(users: &[UserScore], min_scores: &MinScores) -> Vec<Placement> {
    PlacementCalculator::new(*min_scores).calculate(users)
}
