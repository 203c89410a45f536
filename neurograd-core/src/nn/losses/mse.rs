use crate::error::NeuroGradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction applied to the per-component squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl FromStr for Reduction {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(NeuroGradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between network outputs and numeric targets.
///
/// The loss is itself a graph node, so `loss.backward()` reaches every
/// parameter that contributed to `predictions`.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (pᵢ - tᵢ)²`, divided by the component count for [`Reduction::Mean`].
    ///
    /// # Errors
    /// `ShapeMismatch` if the slices differ in length or are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, NeuroGradError> {
        if predictions.len() != targets.len() {
            return Err(NeuroGradError::shape_mismatch(
                targets.len(),
                predictions.len(),
                "MSELoss calculate",
            ));
        }

        let total = predictions
            .iter()
            .zip(targets)
            .map(|(p, &t)| (p - t).pow(2.0))
            .reduce(|acc, term| acc + term)
            .ok_or_else(|| NeuroGradError::shape_mismatch(1, 0, "MSELoss calculate"))?;

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / predictions.len() as f64,
        })
    }
}

/// Summed squared error, the loss used by the trainer for regression targets.
pub fn mse_loss(predictions: &[Value], targets: &[f64]) -> Result<Value, NeuroGradError> {
    MSELoss::default().calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
