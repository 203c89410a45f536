use crate::value::Value;
use approx::abs_diff_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check needs at least one input")]
    NoInputs,

    #[error("Epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

/// Evaluates `func` on fresh leaves built from `point`, returning the output value.
fn evaluate<F>(func: &F, point: &[f64]) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let leaves: Vec<Value> = point.iter().copied().map(Value::new).collect();
    func(&leaves).data()
}

/// Centered finite-difference gradient of `func` at `point`.
///
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` for each coordinate.
pub fn numerical_grad<F>(func: &F, point: &[f64], epsilon: f64) -> Vec<f64>
where
    F: Fn(&[Value]) -> Value,
{
    let mut perturbed = point.to_vec();
    let mut grads = Vec::with_capacity(point.len());
    for i in 0..point.len() {
        perturbed[i] = point[i] + epsilon;
        let plus = evaluate(func, &perturbed);
        perturbed[i] = point[i] - epsilon;
        let minus = evaluate(func, &perturbed);
        perturbed[i] = point[i];
        grads.push((plus - minus) / (2.0 * epsilon));
    }
    grads
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives one leaf per entry of `point` and must build a scalar expression
/// from them. The analytical gradients come from a single `backward()` on the output;
/// each one must match the centered difference within `tolerance` (absolute).
///
/// # Example
/// ```
/// use neurograd_core::autograd::check_grad;
///
/// let f = |x: &[neurograd_core::Value]| (&x[0] * &x[1]).tanh() + x[0].pow(3.0);
/// check_grad(f, &[0.3, -1.2], 1e-6, 1e-4).unwrap();
/// ```
pub fn check_grad<F>(func: F, point: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    if point.is_empty() {
        return Err(GradCheckError::NoInputs);
    }
    if !(epsilon > 0.0 && epsilon.is_finite()) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = point.iter().copied().map(Value::new).collect();
    let output = func(&leaves);
    output.backward();

    // --- 2. Numerical gradients, compared per input ---
    let mut perturbed = point.to_vec();
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        perturbed[i] = point[i] + epsilon;
        let loss_plus = evaluate(&func, &perturbed);
        perturbed[i] = point[i] - epsilon;
        let loss_minus = evaluate(&func, &perturbed);
        perturbed[i] = point[i];

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !abs_diff_eq!(analytical, numerical, epsilon = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
