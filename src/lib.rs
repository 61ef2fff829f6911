//! slotdb - a single-table record store with a fixed-width row format.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        slotdb                           │
//! ├─────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │        Command shell (src/main.rs, binary)       │   │
//! │  │     line reader → parser → Statement values      │   │
//! │  └─────────────────────────────────────────────────┘   │
//! │                           ↓                             │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │         Statement Executor (execution/)          │   │
//! │  │    Insert → Table::insert, Select → Table::scan  │   │
//! │  └─────────────────────────────────────────────────┘   │
//! │                           ↓                             │
//! │  ┌─────────────────────────────────────────────────┐   │
//! │  │             Storage layer (storage/)             │   │
//! │  │        Table → Pager → Page  +  Row codec        │   │
//! │  └─────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is in-memory and single-threaded: the table owns its pages
//! exclusively, every operation runs to completion before the next one
//! starts, and the whole store is discarded at process exit.
//!
//! # Modules
//! - [`common`] - Shared primitives (layout constants, Error, index newtypes)
//! - [`storage`] - Row codec, pager, and the table
//! - [`execution`] - Statement values and the executor
//!
//! # Quick Start
//! ```
//! use slotdb::{execute_statement, Row, Statement, StatementResult, Table};
//!
//! let mut table = Table::new();
//!
//! execute_statement(&mut table, Statement::Insert(Row::new(1, "alice", "a@example.com")))?;
//!
//! match execute_statement(&mut table, Statement::Select)? {
//!     StatementResult::Rows(rows) => assert_eq!(rows.len(), 1),
//!     _ => unreachable!(),
//! }
//! # slotdb::Result::Ok(())
//! ```

pub mod common;
pub mod execution;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::{
    EMAIL_SIZE, PAGE_SIZE, ROWS_PER_PAGE, ROW_SIZE, TABLE_MAX_PAGES, TABLE_MAX_ROWS, USERNAME_SIZE,
};
pub use common::{Error, PageIndex, Result, RowIndex};

pub use execution::{execute_statement, Statement, StatementResult};
pub use storage::{Page, Pager, Row, RowSlot, Scan, Table};
