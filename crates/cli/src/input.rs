//! Coercion of raw operator text into typed values.

use thiserror::Error;

/// Malformed operator input. Never reaches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    InvalidInteger(String),

    #[error("'{0}' is not a valid decimal number")]
    InvalidDecimal(String),
}

pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| InputError::InvalidInteger(raw.to_string()))
}

/// Accepts finite decimals only; `inf` and `NaN` are treated as malformed.
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(InputError::InvalidDecimal(raw.to_string())),
    }
}

/// Blank input means "leave unchanged".
pub fn parse_optional_quantity(raw: &str) -> Result<Option<i64>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_quantity(raw).map(Some)
}

/// Blank input means "leave unchanged".
pub fn parse_optional_price(raw: &str) -> Result<Option<f64>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_price(raw).map(Some)
}
