use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use engine::Engine;
use field_validation::{FieldsValidator, Validate};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{ServerError, expense_types, expenses};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ServerOptions {
    /// Requests running longer are answered with `504 Gateway Timeout`.
    pub request_timeout: Duration,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub validator: Arc<FieldsValidator>,
}

impl ServerState {
    /// Run the field rules of `value`, failing with every broken rule.
    pub(crate) fn validate<T: Validate>(&self, value: &T) -> Result<(), ServerError> {
        let errors = self.validator.validate_fields(value);
        if errors.is_empty() {
            return Ok(());
        }
        tracing::debug!(count = errors.len(), "request failed validation");
        Err(ServerError::Validation(errors))
    }
}

pub fn router(engine: Engine, options: &ServerOptions) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
        validator: Arc::new(FieldsValidator::new()),
    };

    Router::new()
        .route(
            "/v1/expenses",
            post(expenses::expense_new).get(expenses::search_in_period),
        )
        .route(
            "/v1/expense-types",
            post(expense_types::expense_type_new).get(expense_types::list),
        )
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            options.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(engine: Engine, addr: &str, options: ServerOptions) {
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener, options).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
    options: ServerOptions,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine, &options)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
    options: ServerOptions,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener, options).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
