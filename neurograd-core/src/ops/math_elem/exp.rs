use crate::autograd::BackwardOp;
use crate::value::Value;

/// Natural exponential `e^a`; the local gradient is the output itself.
pub fn exp_op(a: &Value) -> Value {
    let output = a.data().exp();
    Value::from_op(output, vec![a.clone()], BackwardOp::Exp { output })
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}
