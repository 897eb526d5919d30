//! Errors raised while configuring a [`FieldsValidator`].
//!
//! Validation failures are never errors: they are reported as
//! [`FieldError`] values. The variants below only cover mistakes made while
//! registering rules and translations at startup.
//!
//!  [`FieldsValidator`]: crate::FieldsValidator
//!  [`FieldError`]: crate::FieldError
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("validation tag must not be empty")]
    EmptyTag,
    #[error("\"{0}\" validation tag already registered")]
    TagCollision(String),
    #[error("\"{0}\" translation already registered")]
    TranslationExists(String),
}
