//! The module contains `Expense` and its persisted row.
//!
//! The row stores the money as two columns (`amount`, `currency`) and keeps
//! only the expense type id; reading an expense back always joins the type.

use chrono::{NaiveDate, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ExpenseType, Money, ResultEngine, expense_types};

/// A single expense.
///
/// All invariants are checked on construction:
/// - the id is not nil
/// - the amount is strictly positive
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    id: Uuid,
    amount: Money,
    expense_date: NaiveDate,
    description: Option<String>,
    expense_type: ExpenseType,
}

impl Expense {
    pub fn new(
        amount: Money,
        expense_date: NaiveDate,
        description: Option<String>,
        expense_type: ExpenseType,
    ) -> ResultEngine<Self> {
        Self::with_id(
            Uuid::new_v4(),
            amount,
            expense_date,
            description,
            expense_type,
        )
    }

    pub fn with_id(
        id: Uuid,
        amount: Money,
        expense_date: NaiveDate,
        description: Option<String>,
        expense_type: ExpenseType,
    ) -> ResultEngine<Self> {
        if id.is_nil() {
            return Err(EngineError::InvalidDomainModel(
                "invalid id, it must be a valid UUID".to_string(),
            ));
        }
        if amount.amount() <= 0.0 {
            return Err(EngineError::InvalidDomainModel(
                "invalid expense amount, it must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            id,
            amount,
            expense_date,
            description,
            expense_type,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn expense_date(&self) -> NaiveDate {
        self.expense_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn expense_type(&self) -> &ExpenseType {
        &self.expense_type
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub expense_date: Date,
    pub description: Option<String>,
    pub expense_type_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::expense_types::Entity",
        from = "Column::ExpenseTypeId",
        to = "super::expense_types::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    ExpenseTypes,
}

impl Related<super::expense_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExpenseTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Expense> for ActiveModel {
    fn from(value: &Expense) -> Self {
        let now = Utc::now();
        Self {
            id: ActiveValue::Set(value.id.to_string()),
            amount: ActiveValue::Set(value.amount.amount()),
            currency: ActiveValue::Set(value.amount.currency_code().to_string()),
            expense_date: ActiveValue::Set(value.expense_date),
            description: ActiveValue::Set(value.description.clone()),
            expense_type_id: ActiveValue::Set(value.expense_type.id().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }
}

impl TryFrom<(Model, expense_types::Model)> for Expense {
    type Error = EngineError;

    fn try_from((model, type_model): (Model, expense_types::Model)) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&model.id).map_err(|_| {
            EngineError::InvalidDomainModel(format!("invalid stored expense id {}", model.id))
        })?;
        let amount = Money::new(model.amount, &model.currency)?;
        let expense_type = ExpenseType::try_from(type_model)?;

        Expense::with_id(
            id,
            amount,
            model.expense_date,
            model.description,
            expense_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery() -> ExpenseType {
        ExpenseType::new("Delivery").unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, 15).unwrap()
    }

    #[test]
    fn accessors_return_constructor_inputs() {
        let amount = Money::new(100.2, "ARS").unwrap();
        let expense_type = delivery();
        let expense = Expense::new(
            amount,
            date(),
            Some("Lomitos".to_string()),
            expense_type.clone(),
        )
        .unwrap();

        assert!(!expense.id().is_nil());
        assert_eq!(expense.amount(), &amount);
        assert_eq!(expense.expense_date(), date());
        assert_eq!(expense.description(), Some("Lomitos"));
        assert_eq!(expense.expense_type(), &expense_type);
    }

    #[test]
    fn rejects_nil_id() {
        let amount = Money::new(1.0, "ARS").unwrap();
        assert!(matches!(
            Expense::with_id(Uuid::nil(), amount, date(), None, delivery()),
            Err(EngineError::InvalidDomainModel(_))
        ));
    }

    #[test]
    fn active_model_keeps_foreign_key() {
        let expense_type = delivery();
        let expense = Expense::new(
            Money::new(5.5, "USD").unwrap(),
            date(),
            None,
            expense_type.clone(),
        )
        .unwrap();

        let active = ActiveModel::from(&expense);
        assert_eq!(
            active.expense_type_id,
            ActiveValue::Set(expense_type.id().to_string())
        );
        assert_eq!(active.currency, ActiveValue::Set("USD".to_string()));
    }

    #[test]
    fn rehydrates_from_joined_rows() {
        let expense_type = delivery();
        let id = Uuid::new_v4();
        let now = Utc::now();
        let model = Model {
            id: id.to_string(),
            amount: 42.0,
            currency: "EUR".to_string(),
            expense_date: date(),
            description: None,
            expense_type_id: expense_type.id().to_string(),
            created_at: now,
            updated_at: now,
        };
        let type_model = expense_types::Model {
            id: expense_type.id().to_string(),
            name: expense_type.name().to_string(),
            created_at: now,
            updated_at: now,
        };

        let expense = Expense::try_from((model, type_model)).unwrap();
        assert_eq!(expense.id(), id);
        assert_eq!(expense.amount().amount(), 42.0);
        assert_eq!(expense.expense_type(), &expense_type);
    }
}
