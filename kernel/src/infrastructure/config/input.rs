//! Input texts for cdiff.

use serde::Deserialize;

/// Default first (source) text.
pub const DEFAULT_FIRST: &str = "Hello World";

/// Default second (target) text.
pub const DEFAULT_SECOND: &str = "World\nHello";

/// The two texts to compare.
#[derive(Debug, Deserialize, Clone)]
pub struct InputSettings {
    /// Source text.
    pub first: String,
    /// Target text.
    pub second: String,
}
