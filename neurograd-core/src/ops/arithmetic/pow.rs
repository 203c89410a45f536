use crate::autograd::BackwardOp;
use crate::value::Value;

/// Raises a value to a constant power: `a^k`.
///
/// The exponent is a plain `f64`, not a graph node; only `a` receives a gradient,
/// `k * a^(k-1)`.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    let base = a.data();
    Value::from_op(
        base.powf(exponent),
        vec![a.clone()],
        BackwardOp::Pow { base, exponent },
    )
}

impl Value {
    /// `self^exponent` with gradient tracking.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
