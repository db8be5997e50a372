//! Sequence diff built on a longest-common-subsequence table.
//!
//! The engine works on any element type with equality: characters for a
//! fine-grained patch, or line fingerprints for a line patch. The
//! [`DiffAlgorithm`] trait is the seam between the facade and the algorithm.
//!
//! # Example
//!
//! ```
//! use cdiff_engine::diff::Diff;
//!
//! let diff = Diff::new("Hello World", "World\nHello");
//! assert_eq!(diff.line_diff().unwrap(), "+ World\n+ Hello\n- Hello World");
//! assert_eq!(Diff::new("ab", "b").verbose_diff(), "-ab");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod lcs;
pub mod lines;
pub mod render;
pub mod traits;

pub use config::{CollisionPolicy, DiffConfig};
pub use engine::{Diff, LineDiff, LineRecord};
pub use error::DiffError;
pub use lcs::{LcsDiff, LcsTable, build_lcs_table, extract_operations};
pub use lines::{HashedLines, LineEntry, LineFingerprint, LineLookup, Origin, hash_lines};
pub use render::{render_lines, render_verbose};
pub use traits::{DiffAlgorithm, DiffOpKind, DiffOperation, EditScript};
