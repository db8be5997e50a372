//! cdiff engine
//!
//! Computes a minimal edit script between two sequences and renders it as a
//! patch. Characters give a verbose patch where every change is marked; lines
//! are hashed to fingerprints first and give a line patch.

pub mod diff;

pub use diff::{Diff, DiffConfig, DiffError, EditScript};
