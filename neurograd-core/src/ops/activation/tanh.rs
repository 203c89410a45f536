use crate::autograd::BackwardOp;
use crate::value::Value;

/// Hyperbolic tangent, `(e^2a - 1) / (e^2a + 1)`.
///
/// Evaluated with `f64::tanh`, which agrees with the closed form but does not
/// overflow to `inf / inf` for large inputs. Local gradient: `1 - t^2`.
pub fn tanh_op(a: &Value) -> Value {
    let output = a.data().tanh();
    Value::from_op(output, vec![a.clone()], BackwardOp::Tanh { output })
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
