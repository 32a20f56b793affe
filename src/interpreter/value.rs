use std::fmt;

use crate::error::EvalError;

/// Represents a runtime value in the calculator.
///
/// Every evaluation produces exactly one of the two variants, and every
/// variable holds one of them. Consumers match on it exhaustively; arithmetic
/// is only defined on [`Value::Number`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A textual value.
    Text(String),
}

impl Value {
    /// Returns the number inside, or [`EvalError::TypeMismatch`] for text.
    ///
    /// # Example
    /// ```
    /// use tally::{error::EvalError, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), Ok(2.5));
    /// assert_eq!(Value::from("abc").as_number(), Err(EvalError::TypeMismatch));
    /// ```
    pub fn as_number(&self) -> Result<f64, EvalError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(_) => Err(EvalError::TypeMismatch),
        }
    }

    /// Returns the text inside, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Returns `true` for [`Value::Number`].
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    /// Numbers use the shortest `f64` representation (`14`, `0.5`), text is
    /// written verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
