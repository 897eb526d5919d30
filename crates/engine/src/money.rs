use std::fmt;

use iso_currency::Currency;

use crate::{EngineError, ResultEngine};

/// A positive amount of money in an ISO 4217 currency.
///
/// `Money` is immutable once constructed: the only way to get one is
/// [`Money::new`], which checks both the amount and the currency code.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let money = Money::new(100.2, "ARS").unwrap();
/// assert_eq!(money.amount(), 100.2);
/// assert_eq!(money.currency_code(), "ARS");
/// assert!(Money::new(10.0, "ZZZ").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    /// Creates a new amount.
    ///
    /// `currency` must be an upper-case ISO 4217 alphabetic code.
    pub fn new(amount: f64, currency: &str) -> ResultEngine<Self> {
        let currency = Currency::from_code(currency)
            .ok_or_else(|| EngineError::InvalidCurrency(currency.to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EngineError::InvalidAmount(
                "amount must be greater than 0".to_string(),
            ));
        }
        Ok(Self { amount, currency })
    }

    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn currency_code(&self) -> &'static str {
        self.currency.code()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code())
    }
}
