use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_state::{check_buffer_len, OptimizerState};
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_beta, validate_learning_rate};

/// Default momentum factor.
pub const DEFAULT_MOMENTUM_BETA: f64 = 0.9;

/// Gradient descent with a velocity term per parameter:
///
/// ```text
/// velocity = beta * velocity - lr * grad
/// value   += velocity
/// ```
#[derive(Debug, Clone)]
pub struct MomentumOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    beta: f64,
    velocities: Vec<f64>,
}

impl MomentumOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive or `beta` is outside `[0, 1)`.
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        lr: f64,
        beta: f64,
    ) -> Result<Self, NeuroGradError> {
        validate_learning_rate(lr)?;
        validate_beta("beta", beta)?;
        let params: Vec<Parameter> = params.into_iter().collect();
        let velocities = vec![0.0; params.len()];
        Ok(MomentumOptimizer {
            params,
            lr,
            beta,
            velocities,
        })
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }
}

impl Optimizer for MomentumOptimizer {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        for (param, velocity) in self.params.iter().zip(self.velocities.iter_mut()) {
            *velocity = self.beta * *velocity - self.lr * param.grad();
            param.set_data(param.data() + *velocity);
        }
        log::debug!(
            "Momentum step over {} parameters (lr={}, beta={})",
            self.params.len(),
            self.lr,
            self.beta
        );
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
        OptimizerState::Momentum {
            velocities: self.velocities.clone(),
        }
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), NeuroGradError> {
        match state_dict {
            OptimizerState::Momentum { velocities } => {
                check_buffer_len(velocities, self.params.len(), "MomentumOptimizer load_state_dict")?;
                self.velocities = velocities.clone();
                Ok(())
            }
            other => Err(other.unsupported("momentum")),
        }
    }
}

#[cfg(test)]
#[path = "momentum_test.rs"]
mod tests;
