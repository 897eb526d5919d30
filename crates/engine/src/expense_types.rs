//! The module contains `ExpenseType` and its persisted row.

use chrono::Utc;
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// A named category every expense must reference (e.g. "Delivery").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseType {
    id: Uuid,
    name: String,
}

impl ExpenseType {
    /// Create a new expense type with a fresh id.
    pub fn new(name: impl Into<String>) -> ResultEngine<Self> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Rebuild an expense type from a known id.
    pub fn with_id(id: Uuid, name: impl Into<String>) -> ResultEngine<Self> {
        let name = name.into();
        if id.is_nil() {
            return Err(EngineError::InvalidDomainModel(
                "invalid id, it must be a valid UUID".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(EngineError::InvalidDomainModel(
                "invalid name, cannot be empty".to_string(),
            ));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expense_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ExpenseType> for ActiveModel {
    fn from(value: &ExpenseType) -> Self {
        let now = Utc::now();
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            name: ActiveValue::Set(value.name.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }
}

impl TryFrom<Model> for ExpenseType {
    type Error = EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&value.id).map_err(|_| {
            EngineError::InvalidDomainModel(format!("invalid stored expense type id {}", value.id))
        })?;
        ExpenseType::with_id(id, value.name)
    }
}
