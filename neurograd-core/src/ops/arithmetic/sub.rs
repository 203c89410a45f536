use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts two values, built as `a + (b * -1)`.
///
/// No dedicated backward rule: the gradient falls out of the add and mul rules.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
