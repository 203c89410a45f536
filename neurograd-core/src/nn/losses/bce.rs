use crate::error::NeuroGradError;
use crate::value::Value;

/// Predictions are clamped into `[BCE_EPSILON, 1 - BCE_EPSILON]` before the logarithms.
pub const BCE_EPSILON: f64 = 1e-4;

/// Binary cross-entropy for a single probability output.
///
/// `-t·ln(p) - (1-t)·ln(1-p)`. Inside the clamp interval `p` stays in the graph;
/// outside it `p` is replaced by a constant leaf at the bound, so no gradient
/// flows back through a clamped prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct BCELoss;

impl BCELoss {
    pub fn new() -> Self {
        BCELoss
    }

    /// # Errors
    /// `ShapeMismatch` unless there is exactly one prediction and one target.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, NeuroGradError> {
        if predictions.len() != 1 {
            return Err(NeuroGradError::shape_mismatch(1, predictions.len(), "BCELoss calculate"));
        }
        if targets.len() != 1 {
            return Err(NeuroGradError::shape_mismatch(1, targets.len(), "BCELoss calculate"));
        }
        let target = targets[0];
        let p = clamp_probability(&predictions[0]);

        let pos_term = target * p.ln();
        let neg_term = (1.0 - target) * (1.0 - &p).ln();
        Ok(-pos_term - neg_term)
    }
}

fn clamp_probability(prediction: &Value) -> Value {
    let raw = prediction.data();
    if raw < BCE_EPSILON {
        log::warn!("BCE prediction {} clamped to {}", raw, BCE_EPSILON);
        Value::new(BCE_EPSILON)
    } else if raw > 1.0 - BCE_EPSILON {
        log::warn!("BCE prediction {} clamped to {}", raw, 1.0 - BCE_EPSILON);
        Value::new(1.0 - BCE_EPSILON)
    } else {
        prediction.clone()
    }
}

pub fn bce_loss(predictions: &[Value], targets: &[f64]) -> Result<Value, NeuroGradError> {
    BCELoss.calculate(predictions, targets)
}

#[cfg(test)]
#[path = "bce_test.rs"]
mod tests;
