use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides two values, built as `a * b^-1`.
///
/// Division by a zero-valued `b` follows IEEE semantics (`inf`/`NaN`); no error is raised.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
