use std::fmt::Display;

use crate::EngineError;

mod expense_types;
mod expenses;

pub use expense_types::ExpenseTypeService;
pub use expenses::ExpenseService;

/// Wrap a lower-layer failure; services never leak storage errors as-is.
fn unexpected(operation: &str, err: impl Display) -> EngineError {
    tracing::error!(operation, error = %err, "unexpected engine failure");
    EngineError::Unexpected(err.to_string())
}
