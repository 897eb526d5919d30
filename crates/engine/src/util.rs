//! Internal helpers for input normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! trimming rules so commands and entities enforce the same invariants.

use crate::{EngineError, ResultEngine};

/// Trim `value`, rejecting blank input.
pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidCommand(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim `value`, mapping blank input to `None`.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_name_is_trimmed() {
        assert_eq!(
            normalize_required_name("  Delivery ", "expense type").unwrap(),
            "Delivery"
        );
        assert_eq!(
            normalize_required_name("   ", "expense type"),
            Err(EngineError::InvalidCommand(
                "expense type name must not be empty".to_string()
            ))
        );
    }

    #[test]
    fn optional_text_drops_blanks() {
        assert_eq!(normalize_optional_text(Some("  ")), None);
        assert_eq!(normalize_optional_text(None), None);
        assert_eq!(
            normalize_optional_text(Some(" Lomitos ")),
            Some("Lomitos".to_string())
        );
    }
}
