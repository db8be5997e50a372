//! Backtracking an LCS table into an edit script.
use crate::diff::lcs::LcsTable;
use crate::diff::{DiffOperation, EditScript};

/// Walks `table` from the end of both sequences back to the start and
/// collects the operations that turn `first` into `second`.
///
/// The script comes out in backtrack order. When the two neighbouring cells
/// tie, the element of `first` is deleted before the element of `second` is
/// added.
#[must_use]
pub fn extract_operations<T: PartialEq + Copy>(table: &LcsTable<'_, T>) -> EditScript<T> {
    let (first, second) = (table.first(), table.second());
    let (mut i, mut j) = (first.len(), second.len());
    let mut operations = Vec::with_capacity(i + j);
    let mut unchanged = 0;

    while i != 0 || j != 0 {
        if i == 0 {
            operations.push(DiffOperation::addition(second[j - 1], j - 1));
            j -= 1;
        } else if j == 0 {
            operations.push(DiffOperation::deletion(first[i - 1], i - 1));
            i -= 1;
        } else if first[i - 1] == second[j - 1] {
            operations.push(DiffOperation::unchanged(first[i - 1], i - 1));
            unchanged += 1;
            i -= 1;
            j -= 1;
        } else if table.get(j - 1, i) > table.get(j, i - 1) {
            operations.push(DiffOperation::addition(second[j - 1], j - 1));
            j -= 1;
        } else {
            operations.push(DiffOperation::deletion(first[i - 1], i - 1));
            i -= 1;
        }
    }

    EditScript::from_backtrack(operations, unchanged)
}
