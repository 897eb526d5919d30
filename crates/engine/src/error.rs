//! The module contains the errors the engine can return.
//!
//! Services only ever return:
//!
//! - [`InvalidExpenseType`] when an expense references an unknown type.
//! - [`InvalidDomainModel`] when an entity invariant is violated.
//! - [`Unexpected`] wrapping any repository failure.
//!
//! Commands and entities may additionally return [`InvalidCommand`],
//! [`InvalidAmount`] and [`InvalidCurrency`]; repositories return
//! [`Database`].
//!
//!  [`InvalidExpenseType`]: EngineError::InvalidExpenseType
//!  [`InvalidDomainModel`]: EngineError::InvalidDomainModel
//!  [`Unexpected`]: EngineError::Unexpected
//!  [`InvalidCommand`]: EngineError::InvalidCommand
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidCurrency`]: EngineError::InvalidCurrency
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("the expense type doesn't exists")]
    InvalidExpenseType,
    #[error("{0}")]
    InvalidCommand(String),
    #[error("{0}")]
    InvalidDomainModel(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid currency, must be a valid ISO 4217 currency code: {0}")]
    InvalidCurrency(String),
    #[error("{0}")]
    Unexpected(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidExpenseType, Self::InvalidExpenseType) => true,
            (Self::InvalidCommand(a), Self::InvalidCommand(b)) => a == b,
            (Self::InvalidDomainModel(a), Self::InvalidDomainModel(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCurrency(a), Self::InvalidCurrency(b)) => a == b,
            (Self::Unexpected(a), Self::Unexpected(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
