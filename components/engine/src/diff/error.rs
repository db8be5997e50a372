//! Errors raised by the diff engine.

use thiserror::Error;

use crate::diff::lines::LineFingerprint;

/// Errors that can occur while computing a diff.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// Two distinct lines produced the same fingerprint.
    #[error("Line hash collision on fingerprint {fingerprint}: {existing:?} vs {incoming:?}")]
    HashCollision {
        /// The shared fingerprint.
        fingerprint: LineFingerprint,
        /// Text already recorded for the fingerprint.
        existing: String,
        /// Text that collided with it.
        incoming: String,
    },
}
