//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use tracing::Level;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses a local DynamoDB endpoint)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Name of the DynamoDB table holding items
    ///
    /// # Panics
    ///
    /// Panics if `ITEMS_TABLE_NAME` is not set in production or staging
    #[must_use]
    pub fn items_table_name(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("ITEMS_TABLE_NAME")
                .expect("ITEMS_TABLE_NAME environment variable is not set"),
            Self::Development => {
                env::var("ITEMS_TABLE_NAME").unwrap_or_else(|_| "items".to_string())
            }
        }
    }

    /// Bound on the startup wait for the items table to become active
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn table_ready_timeout(&self) -> Duration {
        env::var("TABLE_READY_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map_or(
                item_storage::provision::DEFAULT_READY_TIMEOUT,
                Duration::from_secs,
            )
    }

    /// Default log level when `RUST_LOG` is not set
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
