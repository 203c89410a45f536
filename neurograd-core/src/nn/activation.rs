use crate::value::Value;

/// Nonlinearity applied by a neuron after its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Identity: the weighted sum is passed through unchanged.
    Linear,
    #[default]
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    /// `Relu` for nonlinear units, `Linear` otherwise.
    pub fn from_nonlinear(nonlinear: bool) -> Self {
        if nonlinear {
            Activation::Relu
        } else {
            Activation::Linear
        }
    }

    pub fn apply(&self, x: Value) -> Value {
        match self {
            Activation::Linear => x,
            Activation::Relu => x.relu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Tanh => x.tanh(),
        }
    }

    pub fn is_nonlinear(&self) -> bool {
        !matches!(self, Activation::Linear)
    }
}
