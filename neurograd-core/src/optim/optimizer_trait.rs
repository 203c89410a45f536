use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_state::OptimizerState;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer holds handles to the model's parameters (in the model's
/// flattened order) and updates their values in place from their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the currently accumulated gradients.
    fn step(&mut self) -> Result<(), NeuroGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self) {
        for param in self.params() {
            param.zero_grad();
        }
    }

    /// The parameters being optimized, in update order.
    fn params(&self) -> &[Parameter];

    fn learning_rate(&self) -> f64;

    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), NeuroGradError>;

    /// Returns a snapshot of the optimizer's auxiliary state.
    fn state_dict(&self) -> OptimizerState;

    /// Restores state produced by [`Optimizer::state_dict`].
    ///
    /// # Errors
    /// `UnsupportedOperation` if the state belongs to another optimizer kind,
    /// `ShapeMismatch` if it was saved for a different number of parameters.
    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), NeuroGradError>;
}
