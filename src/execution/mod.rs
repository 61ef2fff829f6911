//! Statement execution.
//!
//! A two-state dispatcher, not a general interpreter:
//! - [`Statement`] - The discriminated input value from the shell
//! - [`execute_statement`] - Applies a statement to a [`Table`](crate::Table)
//! - [`StatementResult`] - What the caller gets back

mod executor;
mod statement;

pub use executor::{execute_statement, StatementResult};
pub use statement::Statement;
