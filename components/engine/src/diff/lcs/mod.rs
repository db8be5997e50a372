//! Longest-common-subsequence diff.
//!
//! The algorithm fills a dense table of LCS lengths for every prefix pair of
//! the two sequences, then walks it back from the bottom-right corner to emit
//! additions, deletions and unchanged elements. Time and space are both
//! O(N·M), which keeps the table directly available for backtracking.

pub mod algorithm;
pub mod backtrack;
pub mod table;

// Re-export main types
pub use algorithm::LcsDiff;
pub use backtrack::extract_operations;
pub use table::{LcsTable, build_lcs_table};
