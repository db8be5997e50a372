//! Fingerprint to line text lookup used by line-mode rendering.
use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::diff::config::CollisionPolicy;
use crate::diff::error::DiffError;
use crate::diff::lines::LineFingerprint;

/// Which input a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The first (source) text.
    First,
    /// The second (target) text.
    Second,
}

/// Location and text of one line inside its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEntry<'a> {
    text: &'a str,
    offset: usize,
    origin: Origin,
}

impl<'a> LineEntry<'a> {
    /// Creates an entry for `text` starting at byte `offset` of its source.
    #[must_use]
    pub const fn new(text: &'a str, offset: usize, origin: Origin) -> Self {
        Self {
            text,
            offset,
            origin,
        }
    }

    /// Returns the line text, without the line feed.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the byte offset of the line in its source text.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true for an empty line.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the input the line was read from.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }
}

/// Maps fingerprints back to displayable line text.
///
/// Borrows the texts it indexes, so it cannot outlive them.
#[derive(Debug, Clone, Default)]
pub struct LineLookup<'a> {
    entries: HashMap<LineFingerprint, LineEntry<'a>>,
}

impl<'a> LineLookup<'a> {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `entries`, resolving fingerprint clashes per `policy`.
    ///
    /// Identical texts under one fingerprint are never a collision; the
    /// later entry replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::HashCollision`] under [`CollisionPolicy::Reject`]
    /// when a fingerprint is already mapped to different text.
    pub fn absorb<I>(&mut self, entries: I, policy: CollisionPolicy) -> Result<(), DiffError>
    where
        I: IntoIterator<Item = (LineFingerprint, LineEntry<'a>)>,
    {
        for (fingerprint, entry) in entries {
            if let Some(existing) = self.entries.get(&fingerprint) {
                if existing.text() != entry.text() {
                    match policy {
                        CollisionPolicy::Reject => {
                            return Err(DiffError::HashCollision {
                                fingerprint,
                                existing: existing.text().to_string(),
                                incoming: entry.text().to_string(),
                            });
                        }
                        CollisionPolicy::Overwrite => {
                            warn!(%fingerprint, "line fingerprint collision, keeping later line");
                        }
                    }
                }
            }
            self.entries.insert(fingerprint, entry);
        }
        Ok(())
    }

    /// Returns the entry recorded for `fingerprint`.
    #[must_use]
    pub fn get(&self, fingerprint: LineFingerprint) -> Option<&LineEntry<'a>> {
        self.entries.get(&fingerprint)
    }

    /// Returns the line text recorded for `fingerprint`.
    #[must_use]
    pub fn text(&self, fingerprint: LineFingerprint) -> Option<&'a str> {
        self.entries.get(&fingerprint).map(LineEntry::text)
    }

    /// Returns the number of distinct fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
