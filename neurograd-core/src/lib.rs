//! Scalar reverse-mode automatic differentiation with a small neural-network
//! library on top.
//!
//! - [`value`]: the graph node [`Value`] and the backward pass.
//! - [`ops`]: arithmetic, activations and elementary functions on values.
//! - [`autograd`]: backward rules, topological ordering and gradient checking.
//! - [`nn`]: neurons, layers, multi-layer perceptrons and losses.
//! - [`optim`]: SGD, momentum and Adam.
//! - [`train`]: the mini-batch training loop.
//! - [`inspect`]: read-only network snapshots.

pub mod autograd;
pub mod error;
pub mod inspect;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod value;

pub use error::NeuroGradError;
pub use value::{NodeId, Value};
