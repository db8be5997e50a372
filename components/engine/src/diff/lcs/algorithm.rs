//! LCS diff algorithm.
use tracing::debug;

use crate::diff::lcs::{build_lcs_table, extract_operations};
use crate::diff::{DiffAlgorithm, EditScript};

/// Table-based LCS diff algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsDiff;

impl LcsDiff {
    /// Creates new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsDiff {
    fn diff<T: PartialEq + Copy>(&self, first: &[T], second: &[T]) -> EditScript<T> {
        let table = build_lcs_table(first, second);
        let script = extract_operations(&table);
        debug!(
            first_len = first.len(),
            second_len = second.len(),
            lcs_len = table.lcs_len(),
            operations = script.len(),
            "computed lcs diff"
        );
        script
    }
}
