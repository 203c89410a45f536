//! Small synthetic datasets for demos and tests.
//!
//! Every generator takes the random source explicitly, so a seeded
//! `StdRng` reproduces the same data.

use neurograd_core::train::Example;
use neurograd_core::NeuroGradError;
use rand::seq::SliceRandom;
use rand::Rng;

/// `n` random bit pairs labelled with their XOR.
pub fn xor_dataset<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Example> {
    (0..n)
        .map(|_| {
            let x1 = rng.gen_bool(0.5);
            let x2 = rng.gen_bool(0.5);
            let label = if x1 != x2 { 1.0 } else { 0.0 };
            Example::new(vec![f64::from(u8::from(x1)), f64::from(u8::from(x2))], label)
        })
        .collect()
}

/// `y = x² + 2x + 1 + ε` with `x` uniform on `[-5, 5)` and `ε` uniform on `[-noise, noise)`.
pub fn regression_dataset<R: Rng + ?Sized>(n: usize, noise: f64, rng: &mut R) -> Vec<Example> {
    let noise = noise.abs();
    (0..n)
        .map(|_| {
            let x: f64 = rng.gen_range(-5.0..5.0);
            let eps = if noise > 0.0 {
                rng.gen_range(-noise..noise)
            } else {
                0.0
            };
            Example::new(vec![x], x * x + 2.0 * x + 1.0 + eps)
        })
        .collect()
}

/// Minimum distance of a point from the separating line `x1 + x2 = 0`.
const SEPARATION_MARGIN: f64 = 0.1;

/// `n` points in `[-1, 1)²` labelled 1 above the line `x1 + x2 = 0` and 0 below,
/// with no point closer to the line than a small margin.
pub fn linearly_separable_dataset<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Example> {
    let mut data = Vec::with_capacity(n);
    while data.len() < n {
        let x1: f64 = rng.gen_range(-1.0..1.0);
        let x2: f64 = rng.gen_range(-1.0..1.0);
        let side = x1 + x2;
        if side.abs() < SEPARATION_MARGIN {
            continue;
        }
        let label = if side > 0.0 { 1.0 } else { 0.0 };
        data.push(Example::new(vec![x1, x2], label));
    }
    data
}

/// Shuffles `data` and splits it into `(train, validation)`, with
/// `floor(len * train_ratio)` items in the training part.
///
/// # Errors
/// `ConfigurationError` if `train_ratio` is outside `[0, 1]`.
pub fn train_val_split<T: Clone, R: Rng + ?Sized>(
    data: &[T],
    train_ratio: f64,
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>), NeuroGradError> {
    if !(0.0..=1.0).contains(&train_ratio) {
        return Err(NeuroGradError::ConfigurationError(format!(
            "train_ratio must be in [0, 1], got {}",
            train_ratio
        )));
    }
    let mut shuffled = data.to_vec();
    shuffled.shuffle(rng);
    let split = (shuffled.len() as f64 * train_ratio).floor() as usize;
    let validation = shuffled.split_off(split);
    Ok((shuffled, validation))
}

#[cfg(test)]
#[path = "toy_test.rs"]
mod tests;
