//! Field values as seen by validation rules.

/// Borrowed view over a single field of the value being validated.
///
/// Rules never see the concrete Rust type of a field, only one of these
/// shapes. `Present`/`Absent` describe nested objects and optional values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Str(&'a str),
    Number(f64),
    Present,
    Absent,
}

impl<'a> Value<'a> {
    /// Whether the value is the zero value of its shape (empty string, `0`,
    /// missing object).
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Str(value) => value.is_empty(),
            Value::Number(value) => *value == 0.0,
            Value::Present => false,
            Value::Absent => true,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Conversion of a struct field into a [`Value`].
pub trait AsValue {
    fn as_value(&self) -> Value<'_>;
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl AsValue for f64 {
    fn as_value(&self) -> Value<'_> {
        Value::Number(*self)
    }
}

impl AsValue for i32 {
    fn as_value(&self) -> Value<'_> {
        Value::Number(f64::from(*self))
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Absent, AsValue::as_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values() {
        assert!(String::new().as_value().is_zero());
        assert!(0.0_f64.as_value().is_zero());
        assert!(None::<String>.as_value().is_zero());
        assert!(!"x".as_value().is_zero());
        assert!(!Value::Present.is_zero());
    }

    #[test]
    fn option_unwraps_inner_value() {
        let value = Some(String::from("ARS"));
        assert_eq!(value.as_value(), Value::Str("ARS"));
        assert_eq!(Some(2.5_f64).as_value().as_number(), Some(2.5));
    }
}
