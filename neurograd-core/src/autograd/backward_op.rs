use crate::value::Value;
use std::fmt;

/// The backward rule bound to a [`Value`] when it is created.
///
/// Every variant captures, by copy, the forward quantities its local derivative
/// needs. The rule therefore does not depend on operand values that may be
/// mutated later (e.g. parameters updated by an optimizer between the forward
/// pass and the backward pass).
///
/// The order of the local gradients returned by [`BackwardOp::local_grads`]
/// **must** match the order of the parents stored on the output node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// Leaf node (constant, input or parameter): nothing to propagate.
    Leaf,
    /// `a + b`
    Add,
    /// `a * b`, storing both operands.
    Mul { lhs: f64, rhs: f64 },
    /// `a^k` for a constant exponent `k`.
    Pow { base: f64, exponent: f64 },
    /// `max(0, a)`, storing the input.
    Relu { input: f64 },
    /// `1 / (1 + e^-a)`, storing the output `s`.
    Sigmoid { output: f64 },
    /// `tanh(a)`, storing the output `t`.
    Tanh { output: f64 },
    /// `e^a`, storing the output.
    Exp { output: f64 },
    /// `ln(a)`, storing the input.
    Ln { input: f64 },
}

impl BackwardOp {
    /// Partial derivatives of the output with respect to each parent, in parent order.
    pub fn local_grads(&self) -> Vec<f64> {
        match *self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add => vec![1.0, 1.0],
            BackwardOp::Mul { lhs, rhs } => vec![rhs, lhs],
            BackwardOp::Pow { base, exponent } => vec![exponent * base.powf(exponent - 1.0)],
            BackwardOp::Relu { input } => {
                let gate = if input > 0.0 { 1.0 } else { 0.0 };
                vec![gate]
            }
            BackwardOp::Sigmoid { output } => vec![output * (1.0 - output)],
            BackwardOp::Tanh { output } => vec![1.0 - output * output],
            BackwardOp::Exp { output } => vec![output],
            BackwardOp::Ln { input } => vec![1.0 / input],
        }
    }

    /// Adds `upstream_grad * local_grad` to each parent's gradient.
    ///
    /// This is the chain rule for a single node: it never overwrites a parent's
    /// gradient, so a parent shared by several consumers receives the sum of all
    /// contributions.
    pub(crate) fn propagate(&self, upstream_grad: f64, parents: &[Value]) {
        for (parent, local) in parents.iter().zip(self.local_grads()) {
            parent.add_grad(local * upstream_grad);
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BackwardOp::Leaf)
    }
}

impl fmt::Display for BackwardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackwardOp::Leaf => write!(f, ""),
            BackwardOp::Add => write!(f, "+"),
            BackwardOp::Mul { .. } => write!(f, "*"),
            BackwardOp::Pow { exponent, .. } => write!(f, "^{}", exponent),
            BackwardOp::Relu { .. } => write!(f, "ReLU"),
            BackwardOp::Sigmoid { .. } => write!(f, "sigmoid"),
            BackwardOp::Tanh { .. } => write!(f, "tanh"),
            BackwardOp::Exp { .. } => write!(f, "exp"),
            BackwardOp::Ln { .. } => write!(f, "ln"),
        }
    }
}
