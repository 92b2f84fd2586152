//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SECUREVIEW_DATA_DIR` - Directory backing the key-value store
//!   (default: `.secureview`)
//! - `SECUREVIEW_LATENCY_MS` - Simulated processing delay for login, signup,
//!   and checkout, in milliseconds (default: 500; set to 0 to disable)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default simulated backend delay, mirroring a network round-trip.
const DEFAULT_LATENCY_MS: u64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the file-backed store.
    pub data_dir: PathBuf,
    /// Artificial delay applied to login, signup, and checkout.
    pub latency: Duration,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SECUREVIEW_LATENCY_MS` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("SECUREVIEW_DATA_DIR")
            .map_or_else(|_| PathBuf::from(".secureview"), PathBuf::from);

        let latency_ms = match std::env::var("SECUREVIEW_LATENCY_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar("SECUREVIEW_LATENCY_MS", e.to_string()))?,
            Err(_) => DEFAULT_LATENCY_MS,
        };

        Ok(Self {
            data_dir,
            latency: Duration::from_millis(latency_ms),
        })
    }
}
