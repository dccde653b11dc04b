use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub limits: InputLimits,
    /// Optional JSON file overriding scoring thresholds.
    pub scoring_rules_path: Option<PathBuf>,
}

/// Size caps applied to request payloads before analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLimits {
    pub max_document_chars: usize,
    pub max_document_name_chars: usize,
    pub max_score_text_chars: usize,
    pub max_body_bytes: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_document_chars: 500_000,
            max_document_name_chars: 255,
            max_score_text_chars: 500_000,
            // 500k chars of JSON-escaped UTF-8 plus envelope
            max_body_bytes: 4 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = InputLimits::default();

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            limits: InputLimits {
                max_document_chars: env_or("MAX_DOCUMENT_CHARS", defaults.max_document_chars)?,
                max_document_name_chars: env_or(
                    "MAX_DOCUMENT_NAME_CHARS",
                    defaults.max_document_name_chars,
                )?,
                max_score_text_chars: env_or(
                    "MAX_SCORE_TEXT_CHARS",
                    defaults.max_score_text_chars,
                )?,
                max_body_bytes: env_or("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            },
            scoring_rules_path: std::env::var_os("SCORING_RULES_PATH").map(PathBuf::from),
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let value: usize = env_or("KG_API_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("KG_API_TEST_PORT_OK", " 9090 ");
        let value: u16 = env_or("KG_API_TEST_PORT_OK", 8080).unwrap();
        assert_eq!(value, 9090);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("KG_API_TEST_PORT_BAD", "eighty");
        let err = env_or::<u16>("KG_API_TEST_PORT_BAD", 8080).unwrap_err();
        assert!(err.to_string().contains("KG_API_TEST_PORT_BAD"));
    }
}
