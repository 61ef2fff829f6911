//! Common types and utilities shared across slotdb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Binary layout and capacity constants
//! - Error types
//! - Index newtypes (RowIndex, PageIndex)

pub mod config;
pub mod error;
mod page_index;
mod row_index;

pub use error::{Error, Result};
pub use page_index::PageIndex;
pub use row_index::RowIndex;
