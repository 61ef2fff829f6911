//! Statement execution against a table.

use crate::common::{Result, RowIndex};
use crate::execution::statement::Statement;
use crate::storage::{Row, Table};

/// Outcome of a successfully executed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementResult {
    /// An insert succeeded; the row lives at this logical index.
    Inserted(RowIndex),
    /// A select produced these rows, in insertion order.
    Rows(Vec<Row>),
}

/// Execute one statement against the given table.
///
/// The table handle is passed in explicitly; the executor holds no state
/// of its own, so independent tables can be driven side by side. Failures
/// from the codec or the table propagate unchanged as the crate's typed
/// errors; none are fatal and none are retried.
pub fn execute_statement(table: &mut Table, statement: Statement) -> Result<StatementResult> {
    match statement {
        Statement::Insert(row) => {
            let index = table.insert(&row)?;
            Ok(StatementResult::Inserted(index))
        }
        Statement::Select => {
            let rows = table.scan().collect::<Result<Vec<Row>>>()?;
            Ok(StatementResult::Rows(rows))
        }
    }
}
