use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two values: `a + b`.
///
/// Local gradients are `1` for both operands, so the upstream gradient flows
/// through unchanged. `add_op(&a, &a)` is valid and gives `a` a gradient of 2.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.data() + b.data(),
        vec![a.clone(), b.clone()],
        BackwardOp::Add,
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
