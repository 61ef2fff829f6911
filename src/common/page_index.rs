//! Page index type.

use std::fmt;

/// Identifies a page slot in the table's page arena.
///
/// Using `usize` because:
/// 1. Pages live in a fixed-length `Vec` of slots
/// 2. Direct indexing without casting: `pages[page_index.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// Valid values are `0..TABLE_MAX_PAGES`; [`Pager::slot_for`] is the only
/// producer and rejects anything beyond that range.
///
/// [`Pager::slot_for`]: crate::storage::Pager::slot_for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageIndex(pub usize);

impl PageIndex {
    /// Create a new PageIndex.
    #[inline]
    pub fn new(index: usize) -> Self {
        PageIndex(index)
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
