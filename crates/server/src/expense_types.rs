//! Expense type API endpoints

use api_types::expense_type::{
    ExpenseTypeCreated, ExpenseTypeList, ExpenseTypeNew, ExpenseTypeView,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{AddExpenseTypeCmd, ExpenseType};

use crate::{ServerError, server::ServerState};

pub(crate) fn expense_type_view(expense_type: &ExpenseType) -> ExpenseTypeView {
    ExpenseTypeView {
        id: expense_type.id(),
        name: expense_type.name().to_string(),
    }
}

/// Handle requests for creating an expense type.
///
/// An existing type with the same name is returned instead of a new one.
pub async fn expense_type_new(
    State(state): State<ServerState>,
    payload: Result<Json<ExpenseTypeNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ExpenseTypeCreated>), ServerError> {
    let Json(payload) = payload.map_err(|err| ServerError::body(err.body_text()))?;
    state.validate(&payload)?;

    let cmd = AddExpenseTypeCmd::new(&payload.name)?;
    let expense_type = state.engine.expense_types().add(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(ExpenseTypeCreated {
            expense_type: expense_type_view(&expense_type),
        }),
    ))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<ExpenseTypeList>, ServerError> {
    let expense_types = state.engine.expense_types().get_all().await?;

    Ok(Json(ExpenseTypeList {
        expense_types: expense_types.iter().map(expense_type_view).collect(),
    }))
}
