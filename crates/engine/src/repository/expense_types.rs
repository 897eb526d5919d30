use async_trait::async_trait;
use sea_orm::{DatabaseConnection, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{ExpenseType, ResultEngine, expense_types};

use super::ExpenseTypeRepository;

#[derive(Clone, Debug)]
pub struct SqlExpenseTypeRepository {
    database: DatabaseConnection,
}

impl SqlExpenseTypeRepository {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ExpenseTypeRepository for SqlExpenseTypeRepository {
    async fn add(&self, expense_type: &ExpenseType) -> ResultEngine<()> {
        expense_types::ActiveModel::from(expense_type)
            .insert(&self.database)
            .await?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> ResultEngine<Option<ExpenseType>> {
        expense_types::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .map(ExpenseType::try_from)
            .transpose()
    }

    async fn get_by_name(&self, name: &str) -> ResultEngine<Option<ExpenseType>> {
        expense_types::Entity::find()
            .filter(expense_types::Column::Name.eq(name))
            .one(&self.database)
            .await?
            .map(ExpenseType::try_from)
            .transpose()
    }

    async fn get_all(&self) -> ResultEngine<Vec<ExpenseType>> {
        expense_types::Entity::find()
            .order_by_asc(expense_types::Column::CreatedAt)
            .all(&self.database)
            .await?
            .into_iter()
            .map(ExpenseType::try_from)
            .collect()
    }
}
