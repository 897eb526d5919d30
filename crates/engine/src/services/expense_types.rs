use std::sync::Arc;

use uuid::Uuid;

use crate::{
    AddExpenseTypeCmd, EngineError, ExpenseType, ResultEngine, repository::ExpenseTypeRepository,
};

use super::unexpected;

#[derive(Clone)]
pub struct ExpenseTypeService {
    repository: Arc<dyn ExpenseTypeRepository>,
}

impl ExpenseTypeService {
    pub fn new(repository: Arc<dyn ExpenseTypeRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when no type has this id.
    pub async fn get_by_id(&self, id: Uuid) -> ResultEngine<Option<ExpenseType>> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|err| unexpected("expense_types.get_by_id", err))
    }

    /// Return the type named `cmd.name()`, creating it when missing.
    ///
    /// Names are matched exactly; an existing type is returned unchanged.
    pub async fn add(&self, cmd: AddExpenseTypeCmd) -> ResultEngine<ExpenseType> {
        if let Some(existing) = self
            .repository
            .get_by_name(cmd.name())
            .await
            .map_err(|err| unexpected("expense_types.get_by_name", err))?
        {
            tracing::debug!(id = %existing.id(), name = existing.name(), "expense type already exists");
            return Ok(existing);
        }

        let expense_type = ExpenseType::new(cmd.name())
            .map_err(|err| EngineError::InvalidDomainModel(err.to_string()))?;
        self.repository
            .add(&expense_type)
            .await
            .map_err(|err| unexpected("expense_types.add", err))?;

        tracing::debug!(id = %expense_type.id(), name = expense_type.name(), "expense type created");
        Ok(expense_type)
    }

    pub async fn get_all(&self) -> ResultEngine<Vec<ExpenseType>> {
        self.repository
            .get_all()
            .await
            .map_err(|err| unexpected("expense_types.get_all", err))
    }
}
