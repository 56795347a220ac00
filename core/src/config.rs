//! Connection settings for the remote service.

use std::error::Error;
use std::fmt;

const BASE_URL_VAR: &str = "WHITEBOARD_BASE_URL";
const TOKEN_VAR: &str = "WHITEBOARD_TOKEN";

/// Base URL and bearer token, resolved once and held immutably.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: String,
}

impl Config {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Read `WHITEBOARD_BASE_URL` and `WHITEBOARD_TOKEN` from the
    /// environment. Blank values count as missing, and every missing
    /// variable is reported in one error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var(BASE_URL_VAR).ok(),
            std::env::var(TOKEN_VAR).ok(),
        )
    }

    fn from_parts(base_url: Option<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let base_url = match base_url {
            Some(v) if !v.trim().is_empty() => v.trim().trim_end_matches('/').to_string(),
            _ => {
                missing.push(BASE_URL_VAR);
                String::new()
            }
        };

        let token = match token {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => {
                missing.push(TOKEN_VAR);
                String::new()
            }
        };

        if missing.is_empty() {
            Ok(Self { base_url, token })
        } else {
            Err(ConfigError::MissingEnv(missing))
        }
    }
}

/// Raised when required environment variables are absent or blank.
#[derive(Debug)]
pub enum ConfigError {
    MissingEnv(Vec<&'static str>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingEnv(names) => {
                write!(f, "missing {}", names.join(", "))
            }
        }
    }
}

impl Error for ConfigError {}
