use crate::{ConfigError, FromEnv};
use std::env;

/// Which browser origins may call the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Any origin (`*`). Used when `CORS_ALLOWED_ORIGIN` is unset or `*`.
    #[default]
    AnyOrigin,
    /// Explicit allow-list of origins.
    Origins(Vec<String>),
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN` as a comma-separated list.
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var("CORS_ALLOWED_ORIGIN") else {
            return Ok(CorsConfig::AnyOrigin);
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        if origins.iter().any(|o| o == "*") {
            return Ok(CorsConfig::AnyOrigin);
        }

        Ok(CorsConfig::Origins(origins))
    }
}
