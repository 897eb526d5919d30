//! Expense API endpoints

use api_types::{
    DATE_LAYOUT, Money,
    expense::{ExpenseCreated, ExpenseList, ExpenseNew, ExpenseSearch, ExpenseView},
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::NaiveDate;
use engine::{AddExpenseCmd, Expense, SearchInPeriodCmd};
use uuid::Uuid;

use crate::{ServerError, expense_types::expense_type_view, server::ServerState};

pub(crate) fn expense_view(expense: &Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id(),
        amount: Money {
            amount: expense.amount().amount(),
            currency: expense.amount().currency_code().to_string(),
        },
        expense_date: expense.expense_date(),
        description: expense.description().unwrap_or_default().to_string(),
        expense_type: expense_type_view(expense.expense_type()),
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ServerError> {
    NaiveDate::parse_from_str(value, DATE_LAYOUT)
        .map_err(|err| ServerError::Command(format!("{field}: {err}")))
}

fn add_expense_cmd(payload: &ExpenseNew) -> Result<AddExpenseCmd, ServerError> {
    let expense_type = payload
        .expense_type
        .as_ref()
        .ok_or_else(|| ServerError::Command("expense_type is required".to_string()))?;
    let expense_type_id = Uuid::parse_str(&expense_type.id)
        .map_err(|err| ServerError::Command(format!("expense_type.id: {err}")))?;
    let expense_date = parse_date("expense_date", &payload.expense_date)?;

    Ok(AddExpenseCmd::new(
        payload.amount.amount,
        payload.amount.currency.as_str(),
        expense_date,
        payload.description.as_deref(),
        expense_type_id,
    )?)
}

/// Handle requests for creating a new expense
pub async fn expense_new(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseCreated>), ServerError> {
    let Json(payload) = payload.map_err(|err| ServerError::body(err.body_text()))?;
    state.validate(&payload)?;

    let cmd = add_expense_cmd(&payload)?;
    let expense = state.engine.expenses().add(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(ExpenseCreated {
            expense: expense_view(&expense),
        }),
    ))
}

/// Handle requests for listing the expenses of a period
pub async fn search_in_period(
    State(state): State<ServerState>,
    query: Result<Query<ExpenseSearch>, QueryRejection>,
) -> Result<Json<ExpenseList>, ServerError> {
    let Query(query) = query.map_err(|err| ServerError::query(err.body_text()))?;
    state.validate(&query)?;

    let cmd = SearchInPeriodCmd::new(
        parse_date("start_date", &query.start_date)?,
        parse_date("end_date", &query.end_date)?,
    )?;
    let expenses = state.engine.expenses().search_in_period(cmd).await?;

    Ok(Json(ExpenseList {
        expenses: expenses.iter().map(expense_view).collect(),
    }))
}
