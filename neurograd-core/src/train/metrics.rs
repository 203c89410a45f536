use crate::error::NeuroGradError;
use crate::nn::losses::LossKind;
use crate::nn::module::Module;
use crate::train::example::Example;
use std::collections::BTreeMap;

/// Named evaluation metrics for one epoch.
pub type Metrics = BTreeMap<String, f64>;

/// Outputs at or above this value count as the positive class.
pub const ACCURACY_THRESHOLD: f64 = 0.5;

/// Per-epoch record returned by [`Trainer::train`](crate::train::Trainer::train).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub losses: Vec<f64>,
    pub metrics: Vec<Metrics>,
}

impl TrainingHistory {
    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

fn first_output<M: Module + ?Sized>(model: &M, example: &Example) -> Result<(f64, f64), NeuroGradError> {
    let outputs = model.call(&example.inputs)?;
    let prediction = outputs
        .first()
        .map(|v| v.data())
        .ok_or_else(|| NeuroGradError::shape_mismatch(1, 0, "metrics prediction"))?;
    let target = example
        .target
        .first()
        .ok_or_else(|| NeuroGradError::shape_mismatch(1, 0, "metrics target"))?;
    Ok((prediction, target))
}

/// Fraction of examples whose first output falls on the same side of
/// [`ACCURACY_THRESHOLD`] as the target.
pub fn accuracy<M: Module + ?Sized>(model: &M, dataset: &[Example]) -> Result<f64, NeuroGradError> {
    if dataset.is_empty() {
        return Err(NeuroGradError::EmptyDataset);
    }
    let mut correct = 0usize;
    for example in dataset {
        let (prediction, target) = first_output(model, example)?;
        if (prediction >= ACCURACY_THRESHOLD) == (target >= ACCURACY_THRESHOLD) {
            correct += 1;
        }
    }
    Ok(correct as f64 / dataset.len() as f64)
}

/// Mean absolute error on the first output.
pub fn mean_absolute_error<M: Module + ?Sized>(
    model: &M,
    dataset: &[Example],
) -> Result<f64, NeuroGradError> {
    if dataset.is_empty() {
        return Err(NeuroGradError::EmptyDataset);
    }
    let mut total = 0.0;
    for example in dataset {
        let (prediction, target) = first_output(model, example)?;
        total += (prediction - target).abs();
    }
    Ok(total / dataset.len() as f64)
}

/// `accuracy` for BCE, `mae` otherwise.
pub fn compute_metrics<M: Module + ?Sized>(
    model: &M,
    dataset: &[Example],
    loss: LossKind,
) -> Result<Metrics, NeuroGradError> {
    let mut metrics = Metrics::new();
    match loss {
        LossKind::Bce => {
            metrics.insert("accuracy".to_string(), accuracy(model, dataset)?);
        }
        LossKind::Mse => {
            metrics.insert("mae".to_string(), mean_absolute_error(model, dataset)?);
        }
    }
    Ok(metrics)
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
