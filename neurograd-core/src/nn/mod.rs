//! Network composition over [`Value`](crate::Value) graphs: parameters, the
//! [`Module`] trait, fully connected layers and differentiable losses.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use activation::Activation;
pub use init::WeightInit;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{bce_loss, mse_loss, BCELoss, LossKind, MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
