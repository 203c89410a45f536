//! Training loop: examples, configuration, metrics and the [`Trainer`].

pub mod config;
pub mod example;
pub mod metrics;
pub mod trainer;

pub use config::TrainerConfig;
pub use example::{Example, Target};
pub use metrics::{Metrics, TrainingHistory};
pub use trainer::Trainer;
