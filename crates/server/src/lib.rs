use api_types::error::{ErrorResponse, FIELD_VALIDATION_ERROR_CODE};
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;
use field_validation::FieldError;

pub use server::{ServerOptions, router, run, run_with_listener, spawn_with_listener};

mod expense_types;
mod expenses;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{
            ExpenseCreated, ExpenseList, ExpenseNew, ExpenseSearch, ExpenseView,
        };
    }

    pub mod expense_type {
        pub use api_types::expense_type::{
            ExpenseTypeCreated, ExpenseTypeList, ExpenseTypeNew, ExpenseTypeRef, ExpenseTypeView,
        };
    }

    pub use api_types::Money;
    pub use api_types::error::ErrorResponse;
}

const MSG_BODY_INVALID: &str = "body is invalid";
const MSG_QUERY_INVALID: &str = "params are invalid, query params start_date and end_date are required";
const MSG_FIELDS_INVALID: &str = "some fields are invalid";
const MSG_UNEXPECTED: &str = "unexpected error";

pub enum ServerError {
    /// The request body or query could not be decoded.
    Bind { msg: &'static str, detail: String },
    /// One or more validation rules failed.
    Validation(Vec<FieldError>),
    /// The request passed validation but could not be turned into a command.
    Command(String),
    Engine(EngineError),
}

impl ServerError {
    pub(crate) fn body(detail: impl ToString) -> Self {
        Self::Bind {
            msg: MSG_BODY_INVALID,
            detail: detail.to_string(),
        }
    }

    pub(crate) fn query(detail: impl ToString) -> Self {
        Self::Bind {
            msg: MSG_QUERY_INVALID,
            detail: detail.to_string(),
        }
    }
}

fn engine_error_response(err: EngineError) -> ErrorResponse {
    match err {
        EngineError::InvalidExpenseType => {
            let msg = err.to_string();
            error_response(StatusCode::BAD_REQUEST, msg.clone(), msg)
        }
        EngineError::InvalidCommand(detail) => {
            error_response(StatusCode::BAD_REQUEST, MSG_FIELDS_INVALID, detail)
        }
        other => {
            tracing::error!("request failed: {other}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                MSG_UNEXPECTED,
                other.to_string(),
            )
        }
    }
}

fn error_response(
    status: StatusCode,
    msg: impl Into<String>,
    detail: impl Into<String>,
) -> ErrorResponse {
    ErrorResponse {
        status_code: status.as_u16(),
        msg: msg.into(),
        error_detail: detail.into(),
        field_errors: Vec::new(),
        error_code: 0,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let body = match self {
            ServerError::Bind { msg, detail } => {
                error_response(StatusCode::BAD_REQUEST, msg, detail)
            }
            ServerError::Validation(field_errors) => ErrorResponse {
                field_errors,
                error_code: FIELD_VALIDATION_ERROR_CODE,
                ..error_response(StatusCode::BAD_REQUEST, MSG_FIELDS_INVALID, MSG_FIELDS_INVALID)
            },
            ServerError::Command(detail) => {
                error_response(StatusCode::BAD_REQUEST, MSG_FIELDS_INVALID, detail)
            }
            ServerError::Engine(err) => engine_error_response(err),
        };

        let status =
            StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_of(err: ServerError) -> (StatusCode, ErrorResponse) {
        let res = err.into_response();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn invalid_expense_type_maps_to_400() {
        let (status, body) = body_of(EngineError::InvalidExpenseType.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.msg, "the expense type doesn't exists");
        assert_eq!(body.error_detail, "the expense type doesn't exists");
        assert_eq!(body.error_code, 0);
    }

    #[tokio::test]
    async fn unexpected_maps_to_500() {
        let (status, body) = body_of(EngineError::Unexpected("db gone".to_string()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status_code, 500);
        assert_eq!(body.msg, "unexpected error");
        assert_eq!(body.error_detail, "db gone");
    }

    #[tokio::test]
    async fn invalid_domain_model_maps_to_500() {
        let (status, _) =
            body_of(EngineError::InvalidDomainModel("bad".to_string()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn validation_carries_field_errors() {
        let errors = vec![FieldError {
            field: "name".to_string(),
            message: "name is a required field".to_string(),
        }];
        let (status, body) = body_of(ServerError::Validation(errors.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.msg, "some fields are invalid");
        assert_eq!(body.error_detail, "some fields are invalid");
        assert_eq!(body.field_errors, errors);
        assert_eq!(body.error_code, 1);
    }

    #[tokio::test]
    async fn command_and_bind_map_to_400() {
        let (status, body) = body_of(ServerError::Command("bad date".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.msg, "some fields are invalid");
        assert_eq!(body.error_detail, "bad date");

        let (status, body) = body_of(ServerError::body("EOF")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.msg, "body is invalid");
        assert!(body.field_errors.is_empty());
    }
}
