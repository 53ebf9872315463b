//! Core types for numclass

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// A parsed, always finite numeric input.
///
/// Values with no fractional part that fit in `i64` are normalized to
/// `Integer`, so `"4.0"` and `"4"` parse to the same value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Parse raw query text using the permissive policy (integer or float).
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_number(raw, "value is empty"));
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Number::Integer(value));
        }

        let value = trimmed
            .parse::<f64>()
            .map_err(|_| Error::invalid_number(raw, "value is not a number"))?;

        if !value.is_finite() {
            return Err(Error::invalid_number(raw, "value must be finite"));
        }

        if value.fract() == 0.0 {
            // i64::MAX as f64 rounds up to 2^63, which is itself out of range
            if value < i64::MIN as f64 || value >= i64::MAX as f64 {
                return Err(Error::invalid_number(
                    raw,
                    "integer is outside the supported range",
                ));
            }
            return Ok(Number::Integer(value as i64));
        }

        Ok(Number::Float(value))
    }

    /// The integral value, or `None` for fractional input
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(*n),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

/// Property tag attached to a classified number
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    Even,
    Odd,
    FloatingPoint,
    Armstrong,
}
