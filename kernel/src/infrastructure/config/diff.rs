//! Diff mode and output settings.

use cdiff_engine::diff::{CollisionPolicy, DiffConfig};
use serde::Deserialize;

/// Granularity of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffMode {
    /// Compare whole lines.
    Line,
    /// Compare characters and mark every change.
    Verbose,
}

/// Shape of the printed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The patch string.
    Patch,
    /// The forward edit script as JSON.
    Json,
}

/// Diff settings.
#[derive(Debug, Deserialize, Clone)]
pub struct DiffSettings {
    /// Comparison granularity.
    pub mode: DiffMode,
    /// Output shape.
    pub format: OutputFormat,
    /// Handling of line fingerprint collisions.
    pub collision_policy: CollisionPolicy,
}

impl DiffSettings {
    /// Returns the engine configuration these settings describe.
    #[must_use]
    pub const fn engine_config(&self) -> DiffConfig {
        DiffConfig::new(self.collision_policy)
    }
}
