//! Binary layout and capacity constants for slotdb.
//!
//! These constants define the on-page row format. Every reader and writer
//! of serialized rows must agree on them; changing any value is a format
//! break.

/// Size of the row identifier field in bytes (u32, little-endian).
pub const ID_SIZE: usize = 4;

/// Capacity of the username field in bytes.
pub const USERNAME_SIZE: usize = 32;

/// Capacity of the email field in bytes.
pub const EMAIL_SIZE: usize = 255;

/// Byte offset of the identifier within a serialized row.
pub const ID_OFFSET: usize = 0;

/// Byte offset of the username within a serialized row.
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;

/// Byte offset of the email within a serialized row.
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;

/// Total size of a serialized row in bytes.
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// Size of a page in bytes (4KB).
///
/// Matches the OS page size on most systems and common database page
/// sizes. Rows are packed whole into pages; the `PAGE_SIZE % ROW_SIZE`
/// remainder at the end of each page is unused.
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a table may allocate.
pub const TABLE_MAX_PAGES: usize = 100;

/// Number of whole rows that fit in one page.
///
/// No row is split across pages, so this is integer division.
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;

/// Maximum number of rows a table can hold.
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
