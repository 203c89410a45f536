use crate::error::NeuroGradError;
use crate::nn::module::Module;
use crate::optim::Optimizer;
use crate::train::config::TrainerConfig;
use crate::train::example::Example;
use crate::train::metrics::{compute_metrics, Metrics, TrainingHistory};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Mini-batch gradient-descent loop over a [`Module`].
///
/// The trainer owns the model and one optimizer built from the configuration,
/// so optimizer state (velocities, Adam moments and step count) carries over
/// between successive calls to [`Trainer::train`].
pub struct Trainer<M: Module> {
    model: M,
    config: TrainerConfig,
    optimizer: Box<dyn Optimizer>,
    rng: StdRng,
}

impl<M: Module> Trainer<M> {
    /// # Errors
    /// `ConfigurationError` if the configuration does not validate.
    pub fn new(model: M, config: TrainerConfig) -> Result<Self, NeuroGradError> {
        config.validate()?;
        let optimizer = config
            .optimizer
            .build(model.parameters(), config.learning_rate)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Trainer {
            model,
            config,
            optimizer,
            rng,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn optimizer(&self) -> &dyn Optimizer {
        self.optimizer.as_ref()
    }

    pub fn optimizer_mut(&mut self) -> &mut dyn Optimizer {
        self.optimizer.as_mut()
    }

    /// Trains for `config.epochs` epochs.
    pub fn train(&mut self, dataset: &[Example]) -> Result<TrainingHistory, NeuroGradError> {
        self.train_with_callback(dataset, |_, _, _| {})
    }

    /// Trains for `config.epochs` epochs, calling `callback(epoch, loss, metrics)`
    /// after each one.
    ///
    /// # Errors
    /// `EmptyDataset` for an empty dataset; shape errors from the model or loss
    /// abort the run, leaving parameters as updated so far.
    pub fn train_with_callback<F>(
        &mut self,
        dataset: &[Example],
        mut callback: F,
    ) -> Result<TrainingHistory, NeuroGradError>
    where
        F: FnMut(usize, f64, &Metrics),
    {
        if dataset.is_empty() {
            return Err(NeuroGradError::EmptyDataset);
        }
        let mut history = TrainingHistory::default();
        let mut order: Vec<usize> = (0..dataset.len()).collect();

        for epoch in 0..self.config.epochs {
            if self.config.shuffle {
                order.shuffle(&mut self.rng);
            }

            let mut loss_sum = 0.0;
            let mut num_batches = 0usize;
            for chunk in order.chunks(self.config.batch_size) {
                let batch: Vec<&Example> = chunk.iter().map(|&i| &dataset[i]).collect();
                let batch_loss = self.train_batch(&batch)?;
                log::debug!("epoch {} batch {}: loss {:.6}", epoch, num_batches, batch_loss);
                loss_sum += batch_loss;
                num_batches += 1;
            }
            let epoch_loss = loss_sum / num_batches as f64;

            let metrics = compute_metrics(&self.model, dataset, self.config.loss)?;
            log::info!("epoch {}: loss {:.6} {:?}", epoch, epoch_loss, metrics);
            callback(epoch, epoch_loss, &metrics);

            history.losses.push(epoch_loss);
            history.metrics.push(metrics);
        }
        Ok(history)
    }

    /// Runs one optimizer update over `batch` and returns its mean loss.
    ///
    /// Gradients are zeroed once, accumulated over every example, divided by
    /// the batch length when it exceeds one, then applied with a single step.
    pub fn train_batch(&mut self, batch: &[&Example]) -> Result<f64, NeuroGradError> {
        if batch.is_empty() {
            return Err(NeuroGradError::EmptyDataset);
        }
        self.optimizer.zero_grad();

        let mut batch_loss = 0.0;
        for example in batch {
            let predictions = self.model.call(&example.inputs)?;
            let loss = self
                .config
                .loss
                .compute(&predictions, example.target.as_slice())?;
            batch_loss += loss.data();
            loss.backward();
        }

        let n = batch.len() as f64;
        if batch.len() > 1 {
            for param in self.optimizer.params() {
                param.set_grad(param.grad() / n);
            }
        }
        self.optimizer.step()?;
        Ok(batch_loss / n)
    }

    /// Metrics of the current model over `dataset`, without updating it.
    pub fn evaluate(&self, dataset: &[Example]) -> Result<Metrics, NeuroGradError> {
        compute_metrics(&self.model, dataset, self.config.loss)
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
