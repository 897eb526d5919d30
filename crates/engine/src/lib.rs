//! Expense tracking domain: entities, commands, repositories and services.
//!
//! [`Engine`] is the single wiring point. It is built once at startup and
//! handed to the HTTP layer; there is no global state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use commands::{AddExpenseCmd, AddExpenseTypeCmd, SearchInPeriodCmd};
pub use error::EngineError;
pub use expense_types::ExpenseType;
pub use expenses::Expense;
pub use money::Money;
pub use repository::{
    ExpenseRepository, ExpenseTypeRepository, SqlExpenseRepository, SqlExpenseTypeRepository,
};
pub use services::{ExpenseService, ExpenseTypeService};

mod commands;
mod error;
mod expense_types;
mod expenses;
mod money;
mod repository;
mod services;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;

#[derive(Clone)]
pub struct Engine {
    expense_types: ExpenseTypeService,
    expenses: ExpenseService,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn expense_types(&self) -> &ExpenseTypeService {
        &self.expense_types
    }

    pub fn expenses(&self) -> &ExpenseService {
        &self.expenses
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: Option<DatabaseConnection>,
    expense_repository: Option<Arc<dyn ExpenseRepository>>,
    expense_type_repository: Option<Arc<dyn ExpenseTypeRepository>>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = Some(db);
        self
    }

    /// Replace the SQL expense repository.
    pub fn expense_repository(mut self, repository: Arc<dyn ExpenseRepository>) -> EngineBuilder {
        self.expense_repository = Some(repository);
        self
    }

    /// Replace the SQL expense type repository.
    pub fn expense_type_repository(
        mut self,
        repository: Arc<dyn ExpenseTypeRepository>,
    ) -> EngineBuilder {
        self.expense_type_repository = Some(repository);
        self
    }

    /// Construct `Engine`
    ///
    /// Every repository that was not replaced needs the database.
    pub async fn build(self) -> ResultEngine<Engine> {
        let expense_types: Arc<dyn ExpenseTypeRepository> = match self.expense_type_repository {
            Some(repository) => repository,
            None => Arc::new(SqlExpenseTypeRepository::new(
                self.database.clone().ok_or_else(missing_database)?,
            )),
        };
        let expenses: Arc<dyn ExpenseRepository> = match self.expense_repository {
            Some(repository) => repository,
            None => Arc::new(SqlExpenseRepository::new(
                self.database.ok_or_else(missing_database)?,
            )),
        };

        Ok(Engine {
            expense_types: ExpenseTypeService::new(expense_types.clone()),
            expenses: ExpenseService::new(expenses, expense_types),
        })
    }
}

fn missing_database() -> EngineError {
    EngineError::Unexpected("engine builder needs a database".to_string())
}
