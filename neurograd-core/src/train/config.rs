use crate::error::NeuroGradError;
use crate::nn::losses::LossKind;
use crate::optim::{validate_beta, validate_learning_rate, OptimizerKind};

/// Hyperparameters for a [`Trainer`](crate::train::Trainer) run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub learning_rate: f64,
    pub batch_size: usize,
    pub epochs: usize,
    pub optimizer: OptimizerKind,
    pub loss: LossKind,
    /// Reshuffle the example order at the start of every epoch.
    pub shuffle: bool,
    /// Seed for shuffling; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            learning_rate: 0.01,
            batch_size: 1,
            epochs: 10,
            optimizer: OptimizerKind::Sgd,
            loss: LossKind::Mse,
            shuffle: true,
            seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn with_loss(mut self, loss: LossKind) -> Self {
        self.loss = loss;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    /// `ConfigurationError` naming the first invalid field.
    pub fn validate(&self) -> Result<(), NeuroGradError> {
        validate_learning_rate(self.learning_rate)?;
        if self.batch_size == 0 {
            return Err(NeuroGradError::ConfigurationError(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.epochs == 0 {
            return Err(NeuroGradError::ConfigurationError(
                "epochs must be at least 1".to_string(),
            ));
        }
        match self.optimizer {
            OptimizerKind::Sgd => {}
            OptimizerKind::Momentum { beta } => validate_beta("momentum beta", beta)?,
            OptimizerKind::Adam { beta1, beta2, eps } => {
                validate_beta("beta1", beta1)?;
                validate_beta("beta2", beta2)?;
                if !(eps > 0.0 && eps.is_finite()) {
                    return Err(NeuroGradError::ConfigurationError(format!(
                        "Adam epsilon must be positive, got {}",
                        eps
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
