//! Storage seams for the engine.
//!
//! Not-found is `Ok(None)`, never an error. Services decide what a missing
//! row means.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{Expense, ExpenseType, ResultEngine};

mod expense_types;
mod expenses;

pub use expense_types::SqlExpenseTypeRepository;
pub use expenses::SqlExpenseRepository;

#[async_trait]
pub trait ExpenseTypeRepository: Send + Sync {
    async fn add(&self, expense_type: &ExpenseType) -> ResultEngine<()>;

    async fn get_by_id(&self, id: Uuid) -> ResultEngine<Option<ExpenseType>>;

    /// Exact, case-sensitive match.
    async fn get_by_name(&self, name: &str) -> ResultEngine<Option<ExpenseType>>;

    async fn get_all(&self) -> ResultEngine<Vec<ExpenseType>>;
}

#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn add(&self, expense: &Expense) -> ResultEngine<()>;

    /// Expenses dated in `[start, end]`, both ends inclusive.
    async fn search_in_period(&self, start: NaiveDate, end: NaiveDate)
    -> ResultEngine<Vec<Expense>>;
}
