use serde::{Deserialize, Serialize};

/// A participant and the score they earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub user_id: String,
    pub score: u32,
}

impl UserScore {
    pub fn new(user_id: impl Into<String>, score: u32) -> Self {
        Self {
            user_id: user_id.into(),
            score,
        }
    }
}

/// The place a participant ended up on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub user_id: String,
    pub place: u32,
}

impl Placement {
    pub fn new(user_id: impl Into<String>, place: u32) -> Self {
        Self {
            user_id: user_id.into(),
            place,
        }
    }
}
