//! Logical row index type.

use std::fmt;

/// Zero-based position of a row among all rows ever inserted.
///
/// There is no deletion in this core, so a row's logical index equals its
/// insertion order. Using `usize` because the index feeds directly into
/// slot arithmetic and vector indexing without casting.
///
/// # Example
/// ```
/// use slotdb::RowIndex;
///
/// let row = RowIndex::new(42);
/// assert_eq!(row.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(pub usize);

impl RowIndex {
    /// Create a new RowIndex.
    #[inline]
    pub fn new(index: usize) -> Self {
        RowIndex(index)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({})", self.0)
    }
}
