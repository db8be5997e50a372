//! Logging configuration for cdiff.

use serde::Deserialize;

/// Telemetry configuration settings.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Default log filter, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Emit log lines as JSON.
    #[serde(default)]
    pub json: bool,
}
