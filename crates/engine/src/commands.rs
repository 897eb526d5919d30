//! Command structs for engine operations.
//!
//! Commands carry already-checked parameters from the HTTP layer to the
//! services. They are never persisted; the only way to build one is through
//! its `new` function, which enforces the command-level preconditions.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    util::{normalize_optional_text, normalize_required_name},
};

/// Record a new expense.
#[derive(Clone, Debug, PartialEq)]
pub struct AddExpenseCmd {
    amount: f64,
    currency: String,
    expense_date: NaiveDate,
    description: Option<String>,
    expense_type_id: Uuid,
}

impl AddExpenseCmd {
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        expense_date: NaiveDate,
        description: Option<&str>,
        expense_type_id: Uuid,
    ) -> ResultEngine<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidCommand(
                "amount must be greater than 0".to_string(),
            ));
        }
        if expense_type_id.is_nil() {
            return Err(EngineError::InvalidCommand(
                "expense type id must be a valid UUID".to_string(),
            ));
        }
        Ok(Self {
            amount,
            currency: currency.into(),
            expense_date,
            description: normalize_optional_text(description),
            expense_type_id,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn expense_date(&self) -> NaiveDate {
        self.expense_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn expense_type_id(&self) -> Uuid {
        self.expense_type_id
    }
}

/// List expenses whose date falls in `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchInPeriodCmd {
    start: NaiveDate,
    end: NaiveDate,
}

impl SearchInPeriodCmd {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ResultEngine<Self> {
        if start > end {
            return Err(EngineError::InvalidCommand(
                "start date must be before or equal to end date".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

const EXPENSE_TYPE_NAME_MIN_CHARS: usize = 3;
const EXPENSE_TYPE_NAME_MAX_CHARS: usize = 32;

/// Create an expense type, or fetch the one with the same name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddExpenseTypeCmd {
    name: String,
}

impl AddExpenseTypeCmd {
    /// The length bound applies to the trimmed name.
    pub fn new(name: &str) -> ResultEngine<Self> {
        let name = normalize_required_name(name, "expense type")?;
        let chars = name.chars().count();
        if !(EXPENSE_TYPE_NAME_MIN_CHARS..=EXPENSE_TYPE_NAME_MAX_CHARS).contains(&chars) {
            return Err(EngineError::InvalidCommand(format!(
                "expense type name must be between {EXPENSE_TYPE_NAME_MIN_CHARS} and {EXPENSE_TYPE_NAME_MAX_CHARS} characters"
            )));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
