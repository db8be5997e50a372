//! Configuration for diff computations.

use serde::Deserialize;

/// What to do when two distinct lines hash to the same fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the most recently hashed line for the fingerprint.
    #[default]
    Overwrite,
    /// Fail with [`DiffError::HashCollision`](crate::diff::DiffError::HashCollision).
    Reject,
}

/// Configuration for diff computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    collision_policy: CollisionPolicy,
}

impl DiffConfig {
    /// Creates a configuration with the given collision policy.
    #[must_use]
    pub const fn new(collision_policy: CollisionPolicy) -> Self {
        Self { collision_policy }
    }

    /// Returns the line fingerprint collision policy (default: overwrite).
    #[must_use]
    pub const fn collision_policy(&self) -> CollisionPolicy {
        self.collision_policy
    }
}
