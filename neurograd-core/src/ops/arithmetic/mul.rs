use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two values: `a * b`.
///
/// `d(a*b)/da = b` and `d(a*b)/db = a`, both captured at construction.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let (lhs, rhs) = (a.data(), b.data());
    Value::from_op(
        lhs * rhs,
        vec![a.clone(), b.clone()],
        BackwardOp::Mul { lhs, rhs },
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
