//! Line hashing for line-mode diffs.
//!
//! Each line is replaced by a [`LineFingerprint`] so the generic LCS machinery
//! can compare whole lines as single elements. Hashing also yields the
//! entries a [`LineLookup`] needs to turn fingerprints back into text.

pub mod fingerprint;
pub mod lookup;

pub use fingerprint::{HASH_BASE, HASH_MODULUS, LineFingerprint};
pub use lookup::{LineEntry, LineLookup, Origin};

/// Fingerprints of one text, in line order, with their lookup entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedLines<'a> {
    fingerprints: Vec<LineFingerprint>,
    entries: Vec<(LineFingerprint, LineEntry<'a>)>,
}

impl<'a> HashedLines<'a> {
    /// Returns the fingerprint sequence.
    #[must_use]
    pub fn fingerprints(&self) -> &[LineFingerprint] {
        &self.fingerprints
    }

    /// Returns the lookup entries, one per line.
    #[must_use]
    pub fn entries(&self) -> &[(LineFingerprint, LineEntry<'a>)] {
        &self.entries
    }

    /// Splits into the fingerprint sequence and the lookup entries.
    #[must_use]
    pub fn into_parts(self) -> (Vec<LineFingerprint>, Vec<(LineFingerprint, LineEntry<'a>)>) {
        (self.fingerprints, self.entries)
    }
}

/// Splits `text` on line feeds and fingerprints every line.
///
/// The segment after the last line feed always counts as a line, so `""`
/// gives one empty line and `"a\n"` gives `"a"` followed by an empty line.
#[must_use]
pub fn hash_lines(text: &str, origin: Origin) -> HashedLines<'_> {
    let mut fingerprints = Vec::new();
    let mut entries = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        let fingerprint = LineFingerprint::of(line);
        fingerprints.push(fingerprint);
        entries.push((fingerprint, LineEntry::new(line, offset, origin)));
        offset += line.len() + 1;
    }
    HashedLines {
        fingerprints,
        entries,
    }
}
