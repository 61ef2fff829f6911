//! Statement values - the input contract with the command shell.

use crate::storage::Row;

/// A parsed statement, ready to execute.
///
/// The shell (or any other collaborator) is responsible for turning raw
/// user text into one of these; malformed text never reaches the executor.
/// These are the only two statement shapes the store supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Insert one fully-formed row.
    Insert(Row),
    /// Read every row in insertion order.
    Select,
}
