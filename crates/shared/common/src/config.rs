//! Shared configuration structures.

use std::env;

use domain::DuplicateIdPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the duplicate id policy
pub const ENV_DUPLICATE_IDS: &str = "USER_DIRECTORY_DUPLICATE_IDS";

/// Environment variable selecting the log level
pub const ENV_LOG_LEVEL: &str = "USER_DIRECTORY_LOG_LEVEL";

/// Default log level when nothing is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// User directory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// How colliding ids are handled when building the id-keyed map
    pub duplicate_ids: DuplicateIdPolicy,
    /// Log level or filter directive
    pub log_level: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            duplicate_ids: DuplicateIdPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unknown policy values fall back to the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let duplicate_ids = match lookup(ENV_DUPLICATE_IDS) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, DuplicateIdPolicy::default());
                DuplicateIdPolicy::default()
            }),
            None => DuplicateIdPolicy::default(),
        };

        let log_level = lookup(ENV_LOG_LEVEL)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            duplicate_ids,
            log_level,
        }
    }
}
