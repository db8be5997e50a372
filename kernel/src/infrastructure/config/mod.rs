//! Configuration management for cdiff.
//!
//! Settings are layered from built-in defaults and `CDIFF__`-prefixed
//! environment variables, with `__` separating nested keys
//! (`CDIFF__DIFF__MODE=verbose`).
//!
//! # Example
//!
//! ```
//! use cdiff::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! ```

pub mod diff;
pub mod input;
pub mod telemetry;

pub use diff::{DiffMode, DiffSettings, OutputFormat};
pub use input::InputSettings;
pub use telemetry::TelemetrySettings;

use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CDIFF";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// The two texts to compare.
    pub input: InputSettings,
    /// Diff mode and output format.
    pub diff: DiffSettings,
    /// Logging settings.
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Creates a new settings instance from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Creates settings from an explicit map of environment variables
    /// instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn from_env(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(Some(vars)),
        )
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Start with default values
            .set_default("input.first", input::DEFAULT_FIRST)?
            .set_default("input.second", input::DEFAULT_SECOND)?
            .set_default("diff.mode", "line")?
            .set_default("diff.format", "patch")?
            .set_default("diff.collision_policy", "overwrite")?
            .set_default("telemetry.log_level", "warn")?
            .set_default("telemetry.json", false)?
            // Merge in Environment variables
            .add_source(env)
            .build()?;

        s.try_deserialize()
    }
}
