use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use std::fmt::Debug;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module maps a slice of input [`Value`]s to output `Value`s, building graph
/// nodes on top of its own parameters, and exposes those parameters in a stable
/// order so optimizers can keep per-parameter state aligned with them.
pub trait Module: Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `ShapeMismatch` if `inputs` does not have the width the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError>;

    /// Returns all learnable parameters, including those of sub-modules.
    ///
    /// The returned handles share nodes with the module, and the order is the
    /// same on every call.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns all learnable parameters with hierarchical names
    /// (e.g. `"neurons.0.weight.1"`), in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Lifts raw numbers to leaf values and runs [`Module::forward`] on them.
    fn call(&self, inputs: &[f64]) -> Result<Vec<Value>, NeuroGradError> {
        let leaves: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
        self.forward(&leaves)
    }

    /// Number of scalar parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
