use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Arithmetic operations supported by the calculator endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalcError::InvalidOperation(s.to_string()))
    }
}

/// Successful calculator output, serialized as a bare JSON number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum CalcValue {
    Integer(i64),
    Real(f64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    InvalidOperation(String),
    Overflow,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Cannot divide by zero"),
            CalcError::InvalidOperation(op) => write!(
                f,
                "Invalid operation: '{}' (expected one of add, subtract, multiply, divide)",
                op
            ),
            CalcError::Overflow => write!(f, "Arithmetic overflow"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Applies `op` to `a` and `b`.
///
/// Integer operations are checked; division always yields a real number.
pub fn calculate(a: i64, b: i64, op: Operation) -> Result<CalcValue, CalcError> {
    let checked = match op {
        Operation::Add => a.checked_add(b),
        Operation::Subtract => a.checked_sub(b),
        Operation::Multiply => a.checked_mul(b),
        Operation::Divide => {
            if b == 0 {
                return Err(CalcError::DivisionByZero);
            }
            return Ok(CalcValue::Real(a as f64 / b as f64));
        }
    };

    checked.map(CalcValue::Integer).ok_or(CalcError::Overflow)
}
