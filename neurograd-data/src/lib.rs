//! Data utilities for `neurograd-core`: datasets, samplers, a batching
//! [`DataLoader`] and small synthetic datasets.

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod toy;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
