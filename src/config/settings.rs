use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

use crate::models::{MinScores, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

/// Threshold defaults used when the caller does not pass its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub first_place_min_score: u32,
    pub second_place_min_score: u32,
    pub third_place_min_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let min_scores = MinScores::default();

        Self {
            app: AppSettings {
                name: "Leaderboard Placer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            scoring: ScoringSettings {
                first_place_min_score: min_scores.first,
                second_place_min_score: min_scores.second,
                third_place_min_score: min_scores.third,
            },
        }
    }
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("LEADERBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn min_scores(&self) -> MinScores {
        MinScores {
            first: self.scoring.first_place_min_score,
            second: self.scoring.second_place_min_score,
            third: self.scoring.third_place_min_score,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.min_scores().validate()
    }
}
