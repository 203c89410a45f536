//! # DataLoader
//!
//! Groups dataset items into batches, visiting indices in the order chosen by
//! a [`Sampler`].
//!
//! ```rust
//! use neurograd_data::dataloader::DataLoader;
//! use neurograd_data::datasets::VecDataset;
//! use neurograd_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use neurograd_core::NeuroGradError;

/// Batching iterator over a [`Dataset`].
///
/// One iteration of the loader is one pass (epoch). Call [`DataLoader::reset`]
/// to start another pass; a random sampler then yields a fresh order.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// # Errors
    /// `ConfigurationError` if `batch_size` is 0.
    pub fn new(
        dataset: D,
        batch_size: usize,
        mut sampler: S,
        drop_last: bool,
    ) -> Result<Self, NeuroGradError> {
        if batch_size == 0 {
            return Err(NeuroGradError::ConfigurationError(
                "DataLoader batch_size must be at least 1".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
        })
    }

    /// Starts a new pass over the dataset.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    /// Number of batches one full pass yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, NeuroGradError>;

    /// Returns the next batch, or `None` once the pass is exhausted.
    ///
    /// A failed `get` is yielded as `Some(Err(_))`.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            let Some(idx) = self.indices_iter.next() else {
                break;
            };
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
