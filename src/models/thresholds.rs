use serde::{Deserialize, Serialize};

use super::{LeaderboardError, Result};

/// Minimum scores needed to claim 1st, 2nd and 3rd place.
///
/// Expected to satisfy `first > second > third > 0`. Values built through
/// [`MinScores::new`] are checked; deserialized values should be passed
/// through [`MinScores::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinScores {
    #[serde(rename = "firstPlaceMinScore", alias = "first")]
    pub first: u32,
    #[serde(rename = "secondPlaceMinScore", alias = "second")]
    pub second: u32,
    #[serde(rename = "thirdPlaceMinScore", alias = "third")]
    pub third: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    First,
    Second,
    Third,
    Unplaced,
}

impl Default for MinScores {
    fn default() -> Self {
        Self {
            first: 100,
            second: 50,
            third: 10,
        }
    }
}

impl MinScores {
    pub fn new(first: u32, second: u32, third: u32) -> Result<Self> {
        let min_scores = Self { first, second, third };
        min_scores.validate()?;
        Ok(min_scores)
    }

    pub fn validate(&self) -> Result<()> {
        if self.third == 0 {
            return Err(LeaderboardError::InvalidThresholds(
                "third place minimum score must be positive".to_string(),
            ));
        }

        if !(self.first > self.second && self.second > self.third) {
            return Err(LeaderboardError::InvalidThresholds(format!(
                "expected first > second > third, got {} / {} / {}",
                self.first, self.second, self.third
            )));
        }

        Ok(())
    }

    /// Highest tier the score reaches, checked first to third.
    pub fn tier_for(&self, score: u32) -> Tier {
        match score {
            s if s >= self.first => Tier::First,
            s if s >= self.second => Tier::Second,
            s if s >= self.third => Tier::Third,
            _ => Tier::Unplaced,
        }
    }
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::First => "first",
            Tier::Second => "second",
            Tier::Third => "third",
            Tier::Unplaced => "unplaced",
        }
    }

    pub fn is_qualifier(&self) -> bool {
        !matches!(self, Tier::Unplaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        let min_scores = MinScores::default();

        assert_eq!(min_scores.tier_for(100), Tier::First);
        assert_eq!(min_scores.tier_for(99), Tier::Second);
        assert_eq!(min_scores.tier_for(50), Tier::Second);
        assert_eq!(min_scores.tier_for(49), Tier::Third);
        assert_eq!(min_scores.tier_for(10), Tier::Third);
        assert_eq!(min_scores.tier_for(9), Tier::Unplaced);
    }

    #[test]
    fn test_new_rejects_unordered_thresholds() {
        assert!(MinScores::new(100, 50, 10).is_ok());
        assert!(MinScores::new(50, 50, 10).is_err());
        assert!(MinScores::new(100, 10, 50).is_err());
        assert!(MinScores::new(100, 50, 0).is_err());
    }

    #[test]
    fn test_deserialize_accepts_long_and_short_names() {
        let long: MinScores = serde_json::from_str(
            r#"{"firstPlaceMinScore": 180, "secondPlaceMinScore": 100, "thirdPlaceMinScore": 50}"#,
        )
        .unwrap();
        let short: MinScores =
            serde_json::from_str(r#"{"first": 180, "second": 100, "third": 50}"#).unwrap();

        assert_eq!(long, short);
        assert_eq!(long, MinScores::new(180, 100, 50).unwrap());
    }
}
