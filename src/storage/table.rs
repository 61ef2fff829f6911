//! Table - sequential append-only record storage.
//!
//! A [`Table`] tracks the row count and exposes the two operations this
//! store supports: append one row, scan all rows. It owns its [`Pager`]
//! exclusively; no page buffer is ever aliased outside the storage layer.

use crate::common::config::TABLE_MAX_ROWS;
use crate::common::{Error, Result, RowIndex};
use crate::storage::pager::Pager;
use crate::storage::row::Row;

/// A single-table, in-memory record store.
///
/// Created empty, mutated only through [`Table::insert`], and discarded
/// with all of its pages on drop; there is no persistence.
///
/// # Example
/// ```
/// use slotdb::{Row, Table};
///
/// let mut table = Table::new();
/// table.insert(&Row::new(1, "alice", "a@example.com"))?;
///
/// for row in table.scan() {
///     println!("{}", row?);
/// }
/// # slotdb::Result::Ok(())
/// ```
pub struct Table {
    pager: Pager,
    row_count: usize,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            pager: Pager::new(),
            row_count: 0,
        }
    }

    /// Number of rows currently stored.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Whether the table has reached `TABLE_MAX_ROWS`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.row_count >= TABLE_MAX_ROWS
    }

    /// Append a row, returning its logical index.
    ///
    /// All-or-nothing: the row count is bumped only after the bytes are
    /// in the page, so a failed insert leaves the table unchanged.
    ///
    /// # Errors
    /// - `Error::TableFull` if the table already holds `TABLE_MAX_ROWS` rows
    /// - `Error::FieldTooLong` from the row codec
    pub fn insert(&mut self, row: &Row) -> Result<RowIndex> {
        if self.is_full() {
            return Err(Error::TableFull);
        }

        let bytes = row.serialize()?;
        let index = RowIndex::new(self.row_count);
        let slot = Pager::slot_for(index)?;

        self.pager.ensure_page(slot.page);
        self.pager.write_slot(slot, &bytes);
        self.row_count += 1;

        Ok(index)
    }

    /// Scan all rows in insertion order.
    ///
    /// The iterator is lazy (rows are decoded as it advances) and finite;
    /// each call to `scan` restarts from row zero. Slot indices are
    /// strictly ordered by insertion, so no reordering can occur.
    pub fn scan(&self) -> Scan<'_> {
        Scan {
            table: self,
            next: 0,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a table's rows in insertion order.
///
/// Yields `Result<Row>`: decoding reads fixed byte ranges written by this
/// crate, so errors indicate a bug rather than bad input, but they are
/// surfaced instead of swallowed.
pub struct Scan<'a> {
    table: &'a Table,
    next: usize,
}

impl Iterator for Scan<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.table.row_count {
            return None;
        }

        let index = RowIndex::new(self.next);
        self.next += 1;

        let item = Pager::slot_for(index).map(|slot| self.table.pager.read_slot(slot));
        Some(item.and_then(Row::deserialize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.row_count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Scan<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{ROWS_PER_PAGE, USERNAME_SIZE};

    fn collect(table: &Table) -> Vec<Row> {
        table.scan().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = Table::new();
        assert_eq!(table.row_count(), 0);
        assert!(!table.is_full());
    }

    #[test]
    fn test_scan_empty_table() {
        let table = Table::new();
        assert_eq!(table.scan().count(), 0);
    }

    #[test]
    fn test_insert_returns_sequential_indices() {
        let mut table = Table::new();

        let first = table.insert(&Row::new(1, "alice", "a@example.com")).unwrap();
        let second = table.insert(&Row::new(2, "bob", "b@example.com")).unwrap();

        assert_eq!(first, RowIndex::new(0));
        assert_eq!(second, RowIndex::new(1));
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_scan_preserves_insertion_order() {
        let mut table = Table::new();
        let rows: Vec<Row> = (0..5)
            .map(|i| Row::new(i, format!("user{}", i), format!("user{}@example.com", i)))
            .collect();

        for row in &rows {
            table.insert(row).unwrap();
        }

        assert_eq!(collect(&table), rows);
    }

    #[test]
    fn test_rows_span_multiple_pages() {
        let mut table = Table::new();
        let count = ROWS_PER_PAGE * 2 + 3;

        for i in 0..count {
            table
                .insert(&Row::new(i as u32, format!("u{}", i), format!("u{}@e.com", i)))
                .unwrap();
        }

        let rows = collect(&table);
        assert_eq!(rows.len(), count);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, i as u32);
        }
    }

    #[test]
    fn test_scan_is_restartable() {
        let mut table = Table::new();
        table.insert(&Row::new(1, "alice", "a@example.com")).unwrap();
        table.insert(&Row::new(2, "bob", "b@example.com")).unwrap();

        let first_pass = collect(&table);
        let second_pass = collect(&table);
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_scan_size_hint() {
        let mut table = Table::new();
        for i in 0..3 {
            table.insert(&Row::new(i, "u", "e@e.com")).unwrap();
        }

        let mut scan = table.scan();
        assert_eq!(scan.len(), 3);
        scan.next();
        assert_eq!(scan.len(), 2);
    }

    #[test]
    fn test_failed_insert_leaves_table_unchanged() {
        let mut table = Table::new();
        table.insert(&Row::new(1, "alice", "a@example.com")).unwrap();

        let bad = Row::new(2, "x".repeat(USERNAME_SIZE + 1), "b@example.com");
        assert!(table.insert(&bad).is_err());

        assert_eq!(table.row_count(), 1);
        assert_eq!(collect(&table).len(), 1);
    }

    #[test]
    fn test_insert_rejected_at_capacity() {
        let mut table = Table::new();
        for i in 0..TABLE_MAX_ROWS {
            table
                .insert(&Row::new(i as u32, "u", "u@example.com"))
                .unwrap();
        }
        assert!(table.is_full());

        let err = table.insert(&Row::new(0, "u", "u@example.com")).unwrap_err();
        assert_eq!(err, Error::TableFull);
        assert_eq!(table.row_count(), TABLE_MAX_ROWS);
    }
}
