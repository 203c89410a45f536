use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// The backward rule gates the upstream gradient: it passes through when the
/// input was strictly positive and is blocked otherwise (including at 0).
pub fn relu_op(a: &Value) -> Value {
    let input = a.data();
    let output = if input > 0.0 { input } else { 0.0 };
    Value::from_op(output, vec![a.clone()], BackwardOp::Relu { input })
}

impl Value {
    /// `max(0, self)` with gradient tracking.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
