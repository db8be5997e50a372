//! Diff algorithm traits and types.
//!
//! This module provides the operation and edit script types shared by every
//! diff algorithm, together with the [`DiffAlgorithm`] trait that lets the
//! engine drive any implementation through a consistent interface.

use std::fmt;
use std::iter::Rev;
use std::slice::Iter;

use serde::Serialize;

/// The kind of change a single [`DiffOperation`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffOpKind {
    /// The element was inserted from the second sequence.
    Addition,
    /// The element was removed from the first sequence.
    Deletion,
    /// The element is present in both sequences.
    Unchanged,
}

impl DiffOpKind {
    /// Returns the patch marker for this kind, if it has one.
    #[must_use]
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::Addition => Some('+'),
            Self::Deletion => Some('-'),
            Self::Unchanged => None,
        }
    }

    /// Returns true if this kind represents a change (not unchanged).
    #[must_use]
    pub const fn is_change(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl fmt::Display for DiffOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Addition => "ADDITION",
            Self::Deletion => "DELETION",
            Self::Unchanged => "UNCHANGED",
        };
        f.write_str(label)
    }
}

/// A single element-level operation of an edit script.
///
/// `position` indexes the second sequence for additions and the first
/// sequence for deletions and unchanged elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffOperation<T> {
    kind: DiffOpKind,
    element: T,
    position: usize,
}

impl<T> DiffOperation<T> {
    /// Creates a new operation.
    #[must_use]
    pub const fn new(kind: DiffOpKind, element: T, position: usize) -> Self {
        Self {
            kind,
            element,
            position,
        }
    }

    /// Creates an addition of `element` taken from the second sequence.
    #[must_use]
    pub const fn addition(element: T, position: usize) -> Self {
        Self::new(DiffOpKind::Addition, element, position)
    }

    /// Creates a deletion of `element` taken from the first sequence.
    #[must_use]
    pub const fn deletion(element: T, position: usize) -> Self {
        Self::new(DiffOpKind::Deletion, element, position)
    }

    /// Creates an unchanged operation for `element`.
    #[must_use]
    pub const fn unchanged(element: T, position: usize) -> Self {
        Self::new(DiffOpKind::Unchanged, element, position)
    }

    /// Returns the operation kind.
    #[must_use]
    pub const fn kind(&self) -> DiffOpKind {
        self.kind
    }

    /// Returns the element the operation applies to.
    #[must_use]
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Returns the index of the element in its source sequence.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T: fmt::Display> fmt::Display for DiffOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.kind, self.element, self.position)
    }
}

/// An ordered list of operations that transforms one sequence into another.
///
/// Operations are stored in backtrack order, from the end of both sequences
/// toward their start. Use [`EditScript::forward`] to walk them in
/// source-to-target order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript<T> {
    operations: Vec<DiffOperation<T>>,
    unchanged: usize,
}

impl<T> EditScript<T> {
    /// Wraps operations collected in backtrack order.
    #[must_use]
    pub const fn from_backtrack(operations: Vec<DiffOperation<T>>, unchanged: usize) -> Self {
        Self {
            operations,
            unchanged,
        }
    }

    /// Returns the total number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if the script holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns the number of unchanged operations.
    #[must_use]
    pub const fn unchanged_count(&self) -> usize {
        self.unchanged
    }

    /// Returns the number of additions and deletions.
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.operations.len() - self.unchanged
    }

    /// Returns the operations in backtrack (target-to-source) order.
    #[must_use]
    pub fn backtrack_order(&self) -> &[DiffOperation<T>] {
        &self.operations
    }

    /// Iterates the operations in forward (source-to-target) order.
    pub fn forward(&self) -> Rev<Iter<'_, DiffOperation<T>>> {
        self.operations.iter().rev()
    }

    /// Consumes the script, returning the operations in forward order.
    #[must_use]
    pub fn into_forward(mut self) -> Vec<DiffOperation<T>> {
        self.operations.reverse();
        self.operations
    }
}

/// Trait for diff algorithms.
///
/// Implementations compute an [`EditScript`] that transforms `first` into
/// `second` for any element type with equality. The `Send + Sync` bounds allow
/// an algorithm value to be shared across threads.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit script between two sequences.
    ///
    /// # Arguments
    ///
    /// * `first` - The source sequence.
    /// * `second` - The target sequence.
    fn diff<T: PartialEq + Copy>(&self, first: &[T], second: &[T]) -> EditScript<T>;
}
