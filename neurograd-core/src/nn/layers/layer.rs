use crate::error::NeuroGradError;
use crate::nn::activation::Activation;
use crate::nn::init::WeightInit;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `nout` neurons, each seeing the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `nout` neurons with the default uniform initialization.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_init(nin, nout, activation, WeightInit::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if nin == 0 || nout == 0 {
            return Err(NeuroGradError::ConfigurationError(format!(
                "Layer sizes must be positive, got nin={} nout={}",
                nin, nout
            )));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::with_init(nin, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Builds a layer from existing neurons, which must all take the same input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NeuroGradError> {
        let first = neurons.first().ok_or_else(|| {
            NeuroGradError::ConfigurationError("Layer needs at least one neuron".to_string())
        })?;
        let nin = first.nin();
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(NeuroGradError::shape_mismatch(nin, bad.nin(), "Layer::from_neurons"));
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", j, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, neuron) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", neuron)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
