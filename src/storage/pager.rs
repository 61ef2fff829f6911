//! Pager - page buffers and slot addressing.
//!
//! The [`Pager`] owns the raw page buffers and translates a logical row
//! index into a concrete byte range inside a specific page. It knows
//! nothing about row contents; the codec in [`row`](super::row) defines
//! what the bytes mean.

use crate::common::config::{PAGE_SIZE, ROWS_PER_PAGE, ROW_SIZE, TABLE_MAX_PAGES};
use crate::common::{Error, PageIndex, Result, RowIndex};

/// A page of row data.
///
/// This is the unit of allocation: a zero-initialized `PAGE_SIZE` byte
/// buffer holding up to `ROWS_PER_PAGE` serialized rows packed with no
/// gaps. Zeroing at construction keeps unwritten slots deterministic.
pub struct Page {
    data: [u8; PAGE_SIZE],
}

impl Page {
    /// Create a new zeroed page.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0u8; PAGE_SIZE],
        }
    }

    /// Get immutable slice of page data.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable slice of page data.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// The byte range reserved for exactly one serialized row.
///
/// Produced only by [`Pager::slot_for`], which guarantees the page index
/// is in range and the offset leaves `ROW_SIZE` bytes inside the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    /// Page holding the row.
    pub page: PageIndex,
    /// Byte offset of the row within that page.
    pub offset: usize,
}

/// Owns the table's page buffers.
///
/// The arena is a fixed-length vector of `TABLE_MAX_PAGES` slots, each
/// holding an optional owned page. Pages are allocated lazily on first
/// use, so an empty table costs one small vector, not 400KB. Addressing
/// stays O(1) because the slot index is the page index.
pub struct Pager {
    pages: Vec<Option<Box<Page>>>,
}

impl Pager {
    /// Create a pager with no pages allocated.
    pub fn new() -> Self {
        Self {
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        }
    }

    /// Compute the slot for a logical row index.
    ///
    /// Pure arithmetic, independent of insertion history:
    /// `page = index / ROWS_PER_PAGE`, `offset = (index % ROWS_PER_PAGE) * ROW_SIZE`.
    ///
    /// # Errors
    /// `Error::CapacityExceeded` if the computed page index is beyond
    /// `TABLE_MAX_PAGES`.
    pub fn slot_for(row_index: RowIndex) -> Result<RowSlot> {
        let page = row_index.0 / ROWS_PER_PAGE;
        if page >= TABLE_MAX_PAGES {
            return Err(Error::CapacityExceeded(row_index));
        }

        Ok(RowSlot {
            page: PageIndex::new(page),
            offset: (row_index.0 % ROWS_PER_PAGE) * ROW_SIZE,
        })
    }

    /// Allocate the page at `page_index` if it does not exist yet.
    ///
    /// Idempotent; existing pages are left untouched.
    ///
    /// # Panics
    /// Panics if `page_index` is out of range. Only [`Pager::slot_for`]
    /// should produce page indices.
    pub fn ensure_page(&mut self, page_index: PageIndex) {
        let slot = &mut self.pages[page_index.0];
        if slot.is_none() {
            *slot = Some(Box::new(Page::new()));
        }
    }

    /// Copy one serialized row into the slot's byte range.
    ///
    /// # Panics
    /// Panics if the page has not been allocated. Callers must route
    /// through [`Pager::slot_for`] and [`Pager::ensure_page`] first.
    pub fn write_slot(&mut self, slot: RowSlot, bytes: &[u8; ROW_SIZE]) {
        let page = self.pages[slot.page.0]
            .as_mut()
            .unwrap_or_else(|| panic!("write to unallocated {}", slot.page));
        page.as_mut_slice()[slot.offset..slot.offset + ROW_SIZE].copy_from_slice(bytes);
    }

    /// Borrow the slot's byte range (`ROW_SIZE` bytes).
    ///
    /// # Panics
    /// Panics if the page has not been allocated.
    pub fn read_slot(&self, slot: RowSlot) -> &[u8] {
        let page = self.pages[slot.page.0]
            .as_ref()
            .unwrap_or_else(|| panic!("read from unallocated {}", slot.page));
        &page.as_slice()[slot.offset..slot.offset + ROW_SIZE]
    }

    /// Whether the page at `page_index` has been allocated.
    pub fn is_allocated(&self, page_index: PageIndex) -> bool {
        self.pages[page_index.0].is_some()
    }

    /// Number of pages allocated so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
