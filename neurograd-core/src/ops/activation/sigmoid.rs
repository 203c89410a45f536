use crate::autograd::BackwardOp;
use crate::value::Value;

/// Logistic sigmoid: `1 / (1 + e^-a)`.
///
/// The local gradient `s * (1 - s)` is expressed through the forward output `s`.
pub fn sigmoid_op(a: &Value) -> Value {
    let output = 1.0 / (1.0 + (-a.data()).exp());
    Value::from_op(output, vec![a.clone()], BackwardOp::Sigmoid { output })
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
