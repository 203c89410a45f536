//! Optimizers for training neural networks.
//!
//! Every optimizer implements [`Optimizer`] over a flat list of
//! [`Parameter`](crate::nn::Parameter) handles and keeps its per-parameter
//! state in that same order. [`OptimizerKind`] selects one from a training
//! configuration.

pub mod adam;
pub mod kind;
pub mod momentum;
pub mod optimizer_state;
pub mod optimizer_trait;
pub mod sgd;

pub use adam::AdamOptimizer;
pub use kind::OptimizerKind;
pub use momentum::MomentumOptimizer;
pub use optimizer_state::OptimizerState;
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

use crate::error::NeuroGradError;

pub(crate) fn validate_learning_rate(lr: f64) -> Result<(), NeuroGradError> {
    if lr > 0.0 && lr.is_finite() {
        Ok(())
    } else {
        Err(NeuroGradError::ConfigurationError(format!(
            "Learning rate must be positive, got {}",
            lr
        )))
    }
}

pub(crate) fn validate_beta(name: &str, beta: f64) -> Result<(), NeuroGradError> {
    if (0.0..1.0).contains(&beta) {
        Ok(())
    } else {
        Err(NeuroGradError::ConfigurationError(format!(
            "{} must be in [0, 1), got {}",
            name, beta
        )))
    }
}
