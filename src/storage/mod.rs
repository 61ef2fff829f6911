//! Storage layer - row format, pages, and the table.
//!
//! This module owns everything below the statement executor:
//! - [`Row`] - The fixed-width record and its binary codec
//! - [`Pager`] - Page buffers and slot addressing
//! - [`Table`] - Append and full-scan over the pager

mod pager;
mod row;
mod table;

pub use pager::{Page, Pager, RowSlot};
pub use row::Row;
pub use table::{Scan, Table};
