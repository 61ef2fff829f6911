//! Error types for slotdb.

use thiserror::Error;

use crate::common::RowIndex;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in slotdb.
///
/// A single error type keeps error handling consistent across the codec,
/// the pager, and the table. Every failure is reported to the caller as
/// a typed value; nothing is swallowed or retried internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A text field exceeds its fixed capacity at encode time.
    ///
    /// Over-long values are rejected, never truncated.
    #[error("{field} is too long: {len} bytes exceeds capacity {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Decode input is not exactly `ROW_SIZE` bytes.
    ///
    /// Should not occur in normal operation since only this crate
    /// produces serialized rows, but it is checked defensively.
    #[error("malformed row: expected {expected} bytes, got {len}")]
    MalformedRow { len: usize, expected: usize },

    /// A row index addresses a page beyond `TABLE_MAX_PAGES`.
    #[error("{0} is beyond the table's page limit")]
    CapacityExceeded(RowIndex),

    /// Insert attempted while the table holds `TABLE_MAX_ROWS` rows.
    #[error("table is full")]
    TableFull,
}
