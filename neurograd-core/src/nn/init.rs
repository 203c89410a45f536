use crate::error::NeuroGradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Weight initialization scheme for a neuron's incoming weights.
///
/// Biases always start at 0. All schemes draw from the generator passed in,
/// so seeding that generator makes a network fully reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInit {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Gaussian with mean 0 and std `sqrt(2 / fan_in)`, suited to ReLU units.
    Kaiming,
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl WeightInit {
    /// Draws `fan_in` weights.
    ///
    /// # Errors
    /// `ConfigurationError` if the distribution parameters are invalid
    /// (`low >= high`, negative or non-finite `std`).
    pub fn sample<R: Rng + ?Sized>(
        &self,
        fan_in: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, NeuroGradError> {
        match *self {
            WeightInit::Uniform { low, high } => {
                if low >= high || !low.is_finite() || !high.is_finite() {
                    return Err(NeuroGradError::ConfigurationError(format!(
                        "Uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..fan_in).map(|_| dist.sample(rng)).collect())
            }
            WeightInit::Normal { mean, std } => sample_normal(mean, std, fan_in, rng),
            WeightInit::Kaiming => {
                let std = (2.0 / fan_in.max(1) as f64).sqrt();
                sample_normal(0.0, std, fan_in, rng)
            }
        }
    }
}

fn sample_normal<R: Rng + ?Sized>(
    mean: f64,
    std: f64,
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>, NeuroGradError> {
    if !(std >= 0.0 && std.is_finite()) || !mean.is_finite() {
        return Err(NeuroGradError::ConfigurationError(format!(
            "Normal init requires a finite mean and finite std >= 0, got mean {} std {}",
            mean, std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        NeuroGradError::ConfigurationError(format!(
            "Normal init with mean {} and std {}: {}",
            mean, std, e
        ))
    })?;
    Ok((0..count).map(|_| dist.sample(rng)).collect())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
