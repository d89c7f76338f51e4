//! # Registration Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_MIN_PASSWORD_LENGTH=10                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/checkout/registration.toml (Linux)                       │
//! │     ~/Library/Application Support/com.checkout.checkout/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     min_length = 8                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # registration.toml
//! [password]
//! min_length = 8
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::DEFAULT_MIN_PASSWORD_LENGTH;

/// Environment variable overriding `password.min_length`.
pub const MIN_PASSWORD_LENGTH_ENV: &str = "CHECKOUT_MIN_PASSWORD_LENGTH";

// =============================================================================
// Password Policy
// =============================================================================

/// Password strength policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        PasswordPolicy {
            min_length: default_min_length(),
        }
    }
}

// =============================================================================
// Registration Configuration
// =============================================================================

/// Complete registration configuration.
///
/// Settings can only tighten the password rule; see [`Self::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub password: PasswordPolicy,
}

impl RegistrationConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (registration.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading registration config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load registration config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections fall back to defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    ///
    /// `password.min_length` may only raise the default, never lower it.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.password.min_length < DEFAULT_MIN_PASSWORD_LENGTH {
            return Err(ConfigError::InvalidValue("password.min_length".to_string()));
        }

        Ok(())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Takes a lookup closure so tests can inject values without touching
    /// the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(MIN_PASSWORD_LENGTH_ENV) {
            let min_length = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue(MIN_PASSWORD_LENGTH_ENV.to_string()))?;
            debug!(min_length, "Overriding password min length from environment");
            self.password.min_length = min_length;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join("registration.toml"))
    }

    /// Minimum password length in characters, never below
    /// [`DEFAULT_MIN_PASSWORD_LENGTH`] even for an unvalidated config.
    pub fn min_password_length(&self) -> usize {
        self.password.min_length.max(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}
