//! Diff facade over two texts.
use serde::Serialize;
use tracing::{debug, instrument};

use crate::diff::config::DiffConfig;
use crate::diff::error::DiffError;
use crate::diff::lcs::LcsDiff;
use crate::diff::lines::{LineFingerprint, LineLookup, Origin, hash_lines};
use crate::diff::render::{render_lines, render_verbose};
use crate::diff::{DiffAlgorithm, DiffOpKind, EditScript};

/// A diff between two borrowed texts.
///
/// The texts can be compared character by character ([`Diff::verbose_diff`])
/// or line by line ([`Diff::line_diff`]).
#[derive(Debug, Clone)]
pub struct Diff<'a, A: DiffAlgorithm = LcsDiff> {
    first: &'a str,
    second: &'a str,
    config: DiffConfig,
    algorithm: A,
}

impl<'a> Diff<'a> {
    /// Creates a diff of `first` against `second` with the default config.
    #[must_use]
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self::with_config(first, second, DiffConfig::default())
    }

    /// Creates a diff with an explicit configuration.
    #[must_use]
    pub fn with_config(first: &'a str, second: &'a str, config: DiffConfig) -> Self {
        Self::with_algorithm(first, second, config, LcsDiff::new())
    }
}

impl<'a, A: DiffAlgorithm> Diff<'a, A> {
    /// Creates a diff driven by a specific algorithm.
    #[must_use]
    pub const fn with_algorithm(
        first: &'a str,
        second: &'a str,
        config: DiffConfig,
        algorithm: A,
    ) -> Self {
        Self {
            first,
            second,
            config,
            algorithm,
        }
    }

    /// Returns the first (source) text.
    #[must_use]
    pub const fn first(&self) -> &'a str {
        self.first
    }

    /// Returns the second (target) text.
    #[must_use]
    pub const fn second(&self) -> &'a str {
        self.second
    }

    /// Computes the character-level edit script.
    #[must_use]
    pub fn char_script(&self) -> EditScript<char> {
        let first: Vec<char> = self.first.chars().collect();
        let second: Vec<char> = self.second.chars().collect();
        self.algorithm.diff(&first, &second)
    }

    /// Renders the character-level patch, where every added or deleted
    /// character is prefixed with `+` or `-`.
    #[must_use]
    #[instrument(
        level = "debug",
        skip_all,
        fields(first_len = self.first.len(), second_len = self.second.len())
    )]
    pub fn verbose_diff(&self) -> String {
        let script = self.char_script();
        debug!(
            operations = script.len(),
            unchanged = script.unchanged_count(),
            "rendering verbose patch"
        );
        render_verbose(&script)
    }

    /// Hashes both texts and computes the line-level edit script.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::HashCollision`] when the collision policy is
    /// `Reject` and two distinct lines share a fingerprint.
    pub fn line_script(&self) -> Result<LineDiff<'a>, DiffError> {
        let policy = self.config.collision_policy();
        let mut lookup = LineLookup::new();

        let (first, entries) = hash_lines(self.first, Origin::First).into_parts();
        lookup.absorb(entries, policy)?;
        let (second, entries) = hash_lines(self.second, Origin::Second).into_parts();
        lookup.absorb(entries, policy)?;

        let script = self.algorithm.diff(&first, &second);
        debug!(
            first_lines = first.len(),
            second_lines = second.len(),
            distinct = lookup.len(),
            operations = script.len(),
            "computed line script"
        );
        Ok(LineDiff { script, lookup })
    }

    /// Renders the line-level patch.
    ///
    /// # Errors
    ///
    /// See [`Diff::line_script`].
    #[instrument(
        level = "debug",
        skip_all,
        fields(first_len = self.first.len(), second_len = self.second.len())
    )]
    pub fn line_diff(&self) -> Result<String, DiffError> {
        Ok(self.line_script()?.render())
    }
}

/// A line-level edit script together with the lookup that names its lines.
#[derive(Debug, Clone)]
pub struct LineDiff<'a> {
    script: EditScript<LineFingerprint>,
    lookup: LineLookup<'a>,
}

impl<'a> LineDiff<'a> {
    /// Returns the edit script over line fingerprints.
    #[must_use]
    pub const fn script(&self) -> &EditScript<LineFingerprint> {
        &self.script
    }

    /// Returns the fingerprint to text lookup.
    #[must_use]
    pub const fn lookup(&self) -> &LineLookup<'a> {
        &self.lookup
    }

    /// Renders the line patch.
    #[must_use]
    pub fn render(&self) -> String {
        render_lines(&self.script, &self.lookup)
    }

    /// Returns one record per operation, in forward order.
    #[must_use]
    pub fn records(&self) -> Vec<LineRecord<'a>> {
        self.script
            .forward()
            .map(|op| LineRecord {
                kind: op.kind(),
                position: op.position(),
                fingerprint: *op.element(),
                text: self.lookup.text(*op.element()),
            })
            .collect()
    }
}

/// Structured form of one line operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRecord<'a> {
    /// What happened to the line.
    pub kind: DiffOpKind,
    /// Line index in the text the line came from.
    pub position: usize,
    /// Fingerprint of the line.
    pub fingerprint: LineFingerprint,
    /// Text of the line, if known.
    pub text: Option<&'a str>,
}
