use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_state::OptimizerState;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::validate_learning_rate;

/// Implements plain Stochastic Gradient Descent: `value -= lr * grad`.
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    lr: f64,
}

impl SgdOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive and finite.
    pub fn new(params: impl IntoIterator<Item = Parameter>, lr: f64) -> Result<Self, NeuroGradError> {
        validate_learning_rate(lr)?;
        Ok(SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
        })
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        for param in &self.params {
            param.set_data(param.data() - self.lr * param.grad());
        }
        log::debug!("SGD step over {} parameters (lr={})", self.params.len(), self.lr);
        Ok(())
    }

    fn params(&self) -> &[Parameter] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, lr: f64) -> Result<(), NeuroGradError> {
        validate_learning_rate(lr)?;
        self.lr = lr;
        Ok(())
    }

    fn state_dict(&self) -> OptimizerState {
        OptimizerState::Sgd
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), NeuroGradError> {
        match state_dict {
            OptimizerState::Sgd => Ok(()),
            other => Err(other.unsupported("sgd")),
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
