use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_state::{check_buffer_len, OptimizerState};
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::{validate_beta, validate_learning_rate};

pub const DEFAULT_BETA1: f64 = 0.9;
pub const DEFAULT_BETA2: f64 = 0.999;
pub const DEFAULT_EPS: f64 = 1e-8;

/// Adam optimizer.
///
/// Keeps first (`m`) and second (`v`) moment estimates per parameter and one
/// step counter shared by all parameters, incremented once per [`Optimizer::step`].
#[derive(Debug, Clone)]
pub struct AdamOptimizer {
    params: Vec<Parameter>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    m: Vec<f64>,
    v: Vec<f64>,
    iterations: u64,
}

impl AdamOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` or `eps` is not positive, or a beta is outside `[0, 1)`.
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
    ) -> Result<Self, NeuroGradError> {
        validate_learning_rate(lr)?;
        validate_beta("beta1", beta1)?;
        validate_beta("beta2", beta2)?;
        if !(eps > 0.0 && eps.is_finite()) {
            return Err(NeuroGradError::ConfigurationError(format!(
                "Epsilon must be positive, got {}",
                eps
            )));
        }
        let params: Vec<Parameter> = params.into_iter().collect();
        let n = params.len();
        Ok(AdamOptimizer {
            params,
            lr,
            beta1,
            beta2,
            eps,
            m: vec![0.0; n],
            v: vec![0.0; n],
            iterations: 0,
        })
    }

    /// Adam with the usual defaults (0.9, 0.999, 1e-8).
    pub fn with_defaults(
        params: impl IntoIterator<Item = Parameter>,
        lr: f64,
    ) -> Result<Self, NeuroGradError> {
        Self::new(params, lr, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPS)
    }

    /// Number of steps taken so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), NeuroGradError> {
        self.iterations += 1;
        let t = i32::try_from(self.iterations).unwrap_or(i32::MAX);
        let bias_correction1 = 1.0 - self.beta1.powi(t);
        let bias_correction2 = 1.0 - self.beta2.powi(t);

        for ((param, m), v) in self
            .params
            .iter()
            .zip(self.m.iter_mut())
            .zip(self.v.iter_mut())
        {
            let grad = param.grad();
            *m = self.beta1 * *m + (1.0 - self.beta1) * grad;
            *v = self.beta2 * *v + (1.0 - self.beta2) * grad * grad;
            let m_hat = *m / bias_correction1;
            let v_hat = *v / bias_correction2;
            param.set_data(param.data() - self.lr * m_hat / (v_hat.sqrt() + self.eps));
        }
        log::debug!(
            "Adam step {} over {} parameters (lr={})",
            self.iterations,
            self.params.len(),
            self.lr
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
        OptimizerState::Adam {
            m: self.m.clone(),
            v: self.v.clone(),
            iterations: self.iterations,
        }
    }

    fn load_state_dict(&mut self, state_dict: &OptimizerState) -> Result<(), NeuroGradError> {
        match state_dict {
            OptimizerState::Adam { m, v, iterations } => {
                check_buffer_len(m, self.params.len(), "AdamOptimizer load_state_dict")?;
                check_buffer_len(v, self.params.len(), "AdamOptimizer load_state_dict")?;
                self.m = m.clone();
                self.v = v.clone();
                self.iterations = *iterations;
                Ok(())
            }
            other => Err(other.unsupported("adam")),
        }
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
