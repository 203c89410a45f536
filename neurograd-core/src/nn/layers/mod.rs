//! Fully connected building blocks: [`Neuron`], [`Layer`] and [`Mlp`].

pub mod layer;
pub mod mlp;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;
