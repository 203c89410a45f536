//! Differentiable losses built from [`Value`] expressions.

pub mod bce;
pub mod mse;

pub use bce::{bce_loss, BCELoss, BCE_EPSILON};
pub use mse::{mse_loss, MSELoss, Reduction};

use crate::error::NeuroGradError;
use crate::value::Value;

/// Loss selected by the trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossKind {
    /// Summed squared error.
    #[default]
    Mse,
    /// Binary cross-entropy on a single probability output.
    Bce,
}

impl LossKind {
    pub fn compute(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, NeuroGradError> {
        match self {
            LossKind::Mse => mse_loss(predictions, targets),
            LossKind::Bce => bce_loss(predictions, targets),
        }
    }
}
