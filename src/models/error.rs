use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("Failed to read input: {0}")]
    InputError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for LeaderboardError {
    fn from(err: config::ConfigError) -> Self {
        LeaderboardError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion_keeps_message() {
        let err: LeaderboardError = config::ConfigError::Message("missing scoring".to_string()).into();
        assert!(matches!(err, LeaderboardError::ConfigError(_)));
        assert!(err.to_string().contains("missing scoring"));
    }
}
