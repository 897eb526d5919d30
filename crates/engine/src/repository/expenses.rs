use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, QueryFilter, QueryOrder, prelude::*};

use crate::{EngineError, Expense, ResultEngine, expense_types, expenses};

use super::ExpenseRepository;

#[derive(Clone, Debug)]
pub struct SqlExpenseRepository {
    database: DatabaseConnection,
}

impl SqlExpenseRepository {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ExpenseRepository for SqlExpenseRepository {
    async fn add(&self, expense: &Expense) -> ResultEngine<()> {
        expenses::ActiveModel::from(expense)
            .insert(&self.database)
            .await?;
        Ok(())
    }

    async fn search_in_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ResultEngine<Vec<Expense>> {
        let rows = expenses::Entity::find()
            .filter(expenses::Column::ExpenseDate.gte(start))
            .filter(expenses::Column::ExpenseDate.lte(end))
            .order_by_asc(expenses::Column::ExpenseDate)
            .order_by_asc(expenses::Column::CreatedAt)
            .find_also_related(expense_types::Entity)
            .all(&self.database)
            .await?;

        rows.into_iter()
            .map(|(model, type_model)| {
                let type_model = type_model.ok_or_else(|| {
                    EngineError::InvalidDomainModel(format!(
                        "expense {} references missing expense type {}",
                        model.id, model.expense_type_id
                    ))
                })?;
                Expense::try_from((model, type_model))
            })
            .collect()
    }
}
