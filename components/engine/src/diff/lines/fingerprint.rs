//! Polynomial rolling hash over the bytes of a line.
use std::fmt;

use serde::Serialize;

/// Base of the rolling hash.
pub const HASH_BASE: u64 = 251;

/// Modulus of the rolling hash.
pub const HASH_MODULUS: u64 = 1_000_000_009;

/// Fixed-width fingerprint standing in for one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineFingerprint(u64);

impl LineFingerprint {
    /// Wraps a raw fingerprint value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Hashes `line`, which must not contain the line feed.
    ///
    /// Computes `Σ byte[k] · 251^k mod 1_000_000_009` with bytes read as
    /// unsigned values.
    #[must_use]
    pub fn of(line: &str) -> Self {
        let (hash, _) = line.bytes().fold((0u64, 1u64), |(hash, power), byte| {
            (
                (hash + u64::from(byte) * power) % HASH_MODULUS,
                (power * HASH_BASE) % HASH_MODULUS,
            )
        });
        Self(hash)
    }

    /// Returns the raw fingerprint value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_hashes_to_zero() {
        assert_eq!(LineFingerprint::of("").value(), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(LineFingerprint::of("a").value(), 97);
        // 'a' + 'b' * 251
        assert_eq!(LineFingerprint::of("ab").value(), 97 + 98 * 251);
    }

    #[test]
    fn test_value_stays_below_modulus() {
        let long = "~".repeat(4096);
        assert!(LineFingerprint::of(&long).value() < HASH_MODULUS);
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(LineFingerprint::of("ab"), LineFingerprint::of("ba"));
    }
}
