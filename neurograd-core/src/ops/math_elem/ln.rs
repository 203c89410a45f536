use crate::autograd::BackwardOp;
use crate::value::Value;

/// Natural logarithm `ln(a)`, local gradient `1/a`.
///
/// No domain check: `ln(0) = -inf` and negative inputs give `NaN`. Callers that
/// need a finite result (e.g. binary cross-entropy) clamp beforehand.
pub fn ln_op(a: &Value) -> Value {
    let input = a.data();
    Value::from_op(input.ln(), vec![a.clone()], BackwardOp::Ln { input })
}

impl Value {
    pub fn ln(&self) -> Value {
        ln_op(self)
    }
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
