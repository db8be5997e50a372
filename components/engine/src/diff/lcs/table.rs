//! Dense longest-common-subsequence table.
use tracing::trace;

/// LCS lengths for every prefix pair of two sequences.
///
/// Cell `(j, i)` holds the LCS length of `first[..i]` and `second[..j]`, so
/// the grid has `second.len() + 1` rows and `first.len() + 1` columns. The
/// table borrows both sequences, which ties every backtrack to the exact
/// inputs the table was built from.
#[derive(Debug, Clone)]
pub struct LcsTable<'a, T> {
    first: &'a [T],
    second: &'a [T],
    columns: usize,
    cells: Vec<usize>,
}

impl<'a, T: PartialEq> LcsTable<'a, T> {
    /// Builds the table bottom-up, rows over `second`, columns over `first`.
    #[must_use]
    pub fn build(first: &'a [T], second: &'a [T]) -> Self {
        let (n, m) = (first.len(), second.len());
        let columns = n + 1;
        let mut cells = vec![0usize; (m + 1) * columns];
        for j in 1..=m {
            let (prev, row) = cells[(j - 1) * columns..=j * columns + n].split_at_mut(columns);
            for i in 1..=n {
                row[i] = if first[i - 1] == second[j - 1] {
                    prev[i - 1] + 1
                } else {
                    prev[i].max(row[i - 1])
                };
            }
        }
        trace!(rows = m + 1, columns, "built lcs table");
        Self {
            first,
            second,
            columns,
            cells,
        }
    }
}

impl<'a, T> LcsTable<'a, T> {
    /// Returns the cell at row `j` (prefix of `second`) and column `i`
    /// (prefix of `first`).
    ///
    /// # Panics
    ///
    /// Panics if `j > second.len()` or `i > first.len()`.
    #[must_use]
    pub fn get(&self, j: usize, i: usize) -> usize {
        assert!(i < self.columns, "column {i} out of range");
        self.cells[j * self.columns + i]
    }

    /// Returns row `j`, or `None` past the last row.
    #[must_use]
    pub fn row(&self, j: usize) -> Option<&[usize]> {
        let start = j.checked_mul(self.columns)?;
        self.cells.get(start..start + self.columns)
    }

    /// Iterates the rows from the empty prefix of `second` upward.
    pub fn rows(&self) -> std::slice::Chunks<'_, usize> {
        self.cells.chunks(self.columns)
    }

    /// Returns the number of rows (`second.len() + 1`).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.second.len() + 1
    }

    /// Returns the number of columns (`first.len() + 1`).
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns the length of the longest common subsequence of both inputs.
    #[must_use]
    pub fn lcs_len(&self) -> usize {
        self.get(self.second.len(), self.first.len())
    }

    /// Returns the first (source) sequence.
    #[must_use]
    pub const fn first(&self) -> &'a [T] {
        self.first
    }

    /// Returns the second (target) sequence.
    #[must_use]
    pub const fn second(&self) -> &'a [T] {
        self.second
    }
}

/// Builds the LCS table for `first` and `second`.
#[must_use]
pub fn build_lcs_table<'a, T: PartialEq>(first: &'a [T], second: &'a [T]) -> LcsTable<'a, T> {
    LcsTable::build(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_inputs_give_single_zero_cell() {
        let empty: Vec<char> = Vec::new();
        let table = build_lcs_table(&empty, &empty);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.get(0, 0), 0);
        assert_eq!(table.lcs_len(), 0);
    }

    #[test]
    fn test_dimensions_follow_second_then_first() {
        let (a, b) = (chars("abc"), chars("xy"));
        let table = build_lcs_table(&a, &b);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.rows().count(), 3);
        assert!(table.row(2).is_some());
        assert!(table.row(3).is_none());
    }

    #[test]
    fn test_known_table_values() {
        let (a, b) = (chars("AB"), chars("BA"));
        let table = build_lcs_table(&a, &b);
        assert_eq!(table.row(0), Some(&[0, 0, 0][..]));
        assert_eq!(table.row(1), Some(&[0, 0, 1][..]));
        assert_eq!(table.row(2), Some(&[0, 1, 1][..]));
        assert_eq!(table.lcs_len(), 1);
    }

    #[test]
    fn test_lcs_length_of_classic_pair() {
        let (a, b) = (chars("ABCBDAB"), chars("BDCABA"));
        assert_eq!(build_lcs_table(&a, &b).lcs_len(), 4);
    }

    #[test]
    fn test_one_sided_empty_input() {
        let (a, b) = (chars("abc"), Vec::new());
        let table = build_lcs_table(&a, &b);
        assert_eq!(table.row_count(), 1);
        assert!(table.rows().flatten().all(|&c| c == 0));
    }
}
