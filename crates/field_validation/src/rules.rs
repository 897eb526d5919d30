//! Built-in rules and the cross-field date rule.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::{FieldLevel, Value};

pub const REQUIRED: &str = "required";
pub const GT: &str = "gt";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const DATETIME: &str = "datetime";
pub const UUID: &str = "uuid";
pub const ISO4217: &str = "iso4217";

/// Tag of the cross-field date rule.
///
/// The parameter is `<sibling field>,<layout>`, e.g. `end_date,%Y-%m-%d`.
pub const LTE_STR_DATE_FIELD: &str = "lteStrDateField";
pub const LTE_STR_DATE_FIELD_TEMPLATE: &str = "{field} must be before or equal to {param.0}";

/// Rejects the zero value of any shape.
pub fn required(level: &FieldLevel<'_, '_>) -> bool {
    !level.value().is_zero()
}

/// Numbers must be strictly greater than the parameter, strings longer than it.
pub fn gt(level: &FieldLevel<'_, '_>) -> bool {
    let Some(bound) = numeric_param(level) else {
        return false;
    };
    match level.value() {
        Value::Number(value) => value > bound,
        Value::Str(value) => char_len(value) > bound,
        _ => false,
    }
}

pub fn min(level: &FieldLevel<'_, '_>) -> bool {
    let Some(bound) = numeric_param(level) else {
        return false;
    };
    match level.value() {
        Value::Number(value) => value >= bound,
        Value::Str(value) => char_len(value) >= bound,
        _ => false,
    }
}

pub fn max(level: &FieldLevel<'_, '_>) -> bool {
    let Some(bound) = numeric_param(level) else {
        return false;
    };
    match level.value() {
        Value::Number(value) => value <= bound,
        Value::Str(value) => char_len(value) <= bound,
        _ => false,
    }
}

pub fn datetime(level: &FieldLevel<'_, '_>) -> bool {
    level
        .value()
        .as_str()
        .and_then(|value| parse_with_layout(value, level.param()))
        .is_some()
}

pub fn uuid(level: &FieldLevel<'_, '_>) -> bool {
    level
        .value()
        .as_str()
        .is_some_and(|value| Uuid::parse_str(value).is_ok())
}

pub fn iso4217(level: &FieldLevel<'_, '_>) -> bool {
    level
        .value()
        .as_str()
        .is_some_and(|value| iso_currency::Currency::from_code(value).is_some())
}

/// Passes when the field's date is before or equal to the sibling's date.
///
/// Both values are parsed with the same layout; an unparsable value on
/// either side fails the rule.
pub fn lte_str_date_field(level: &FieldLevel<'_, '_>) -> bool {
    let parts = level.param_parts();
    let (Some(other), Some(layout)) = (parts.first(), parts.get(1)) else {
        return false;
    };

    let Some(date) = level
        .value()
        .as_str()
        .and_then(|value| parse_with_layout(value, layout))
    else {
        return false;
    };
    let Some(other_date) = level
        .sibling(other)
        .and_then(|value| value.as_str())
        .and_then(|value| parse_with_layout(value, layout))
    else {
        return false;
    };

    date <= other_date
}

/// Parse `value` with a chrono `strftime` layout.
///
/// Layouts describing only a date or only a time are accepted too; the
/// missing half is filled with midnight or the minimum date.
pub fn parse_with_layout(value: &str, layout: &str) -> Option<NaiveDateTime> {
    if layout.is_empty() {
        return None;
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, layout) {
        return Some(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, layout) {
        return Some(date.and_time(NaiveTime::MIN));
    }
    NaiveTime::parse_from_str(value, layout)
        .ok()
        .map(|time| NaiveDate::MIN.and_time(time))
}

fn numeric_param(level: &FieldLevel<'_, '_>) -> Option<f64> {
    level.param().trim().parse().ok()
}

fn char_len(value: &str) -> f64 {
    value.chars().count() as f64
}
