use chrono::NaiveDate;
use field_validation::{FieldError, Fields, Validate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Layout of every date carried by the API (`2022-03-15`).
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// `{amount, currency}` pair used both in requests and responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Money {
    pub amount: f64,
    /// ISO 4217 alphabetic code, e.g. `ARS`.
    pub currency: String,
}

impl Validate for Money {
    fn fields(&self) -> Fields<'_> {
        Fields::new()
            .field("amount", &self.amount, "required|gt=0")
            .field("currency", &self.currency, "iso4217")
    }
}

pub mod expense_type {
    use super::*;

    /// Request body of `POST /v1/expense-types`.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseTypeNew {
        pub name: String,
    }

    impl Validate for ExpenseTypeNew {
        fn fields(&self) -> Fields<'_> {
            Fields::new().field("name", &self.name, "required|min=3|max=32")
        }
    }

    /// Reference to an existing expense type inside another request.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseTypeRef {
        /// Expense type id (UUID), kept as a string so a malformed value
        /// is reported as a field error instead of a body error.
        pub id: String,
    }

    impl Validate for ExpenseTypeRef {
        fn fields(&self) -> Fields<'_> {
            Fields::new().field("id", &self.id, "required|uuid")
        }
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseTypeView {
        pub id: Uuid,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseTypeCreated {
        pub expense_type: ExpenseTypeView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseTypeList {
        pub expense_types: Vec<ExpenseTypeView>,
    }
}

pub mod expense {
    use super::*;
    use crate::expense_type::{ExpenseTypeRef, ExpenseTypeView};

    /// Request body of `POST /v1/expenses`.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseNew {
        pub amount: Money,
        /// `YYYY-MM-DD`.
        pub expense_date: String,
        pub description: Option<String>,
        pub expense_type: Option<ExpenseTypeRef>,
    }

    impl Validate for ExpenseNew {
        fn fields(&self) -> Fields<'_> {
            Fields::new()
                .nested("amount", Some(&self.amount), "")
                .field(
                    "expense_date",
                    &self.expense_date,
                    "required|datetime=%Y-%m-%d",
                )
                .nested("expense_type", self.expense_type.as_ref(), "required")
        }
    }

    /// Query of `GET /v1/expenses`; both ends are inclusive.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ExpenseSearch {
        pub start_date: String,
        pub end_date: String,
    }

    impl Validate for ExpenseSearch {
        fn fields(&self) -> Fields<'_> {
            Fields::new()
                .field(
                    "start_date",
                    &self.start_date,
                    "required|datetime=%Y-%m-%d|lteStrDateField=end_date,%Y-%m-%d",
                )
                .field("end_date", &self.end_date, "required|datetime=%Y-%m-%d")
        }
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub amount: Money,
        pub expense_date: NaiveDate,
        /// Empty when the expense was recorded without one.
        pub description: String,
        pub expense_type: ExpenseTypeView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub expense: ExpenseView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod error {
    use super::*;

    /// `error_code` of field validation failures.
    pub const FIELD_VALIDATION_ERROR_CODE: u32 = 1;

    /// Uniform error body returned by every endpoint.
    ///
    /// `field_errors` is always present, empty unless `error_code` is
    /// [`FIELD_VALIDATION_ERROR_CODE`].
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub status_code: u16,
        pub msg: String,
        pub error_detail: String,
        pub field_errors: Vec<FieldError>,
        pub error_code: u32,
    }
}
