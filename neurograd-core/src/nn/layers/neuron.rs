use crate::error::NeuroGradError;
use crate::nn::activation::Activation;
use crate::nn::init::WeightInit;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A single unit: `activation(bias + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn uniformly from `[-1, 1)` and a zero bias.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_init(nin, activation, WeightInit::default(), rng)
    }

    /// Creates a neuron whose weights are drawn with `init`. The bias starts at 0.
    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let weights = init.sample(nin, rng)?;
        Ok(Self::from_weights(&weights, 0.0, activation))
    }

    /// Creates a neuron with explicit weights and bias.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().copied().map(Parameter::new).collect(),
            bias: Parameter::new(bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Expected input width.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass producing the single output node directly.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, NeuroGradError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGradError::shape_mismatch(
                self.weights.len(),
                inputs.len(),
                "Neuron::forward",
            ));
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.value().clone(), |acc, (w, x)| acc + w.value() * x);
        Ok(self.activation.apply(pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named: Vec<(String, Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.activation {
            Activation::Linear => "Linear",
            Activation::Relu => "ReLU",
            Activation::Sigmoid => "Sigmoid",
            Activation::Tanh => "Tanh",
        };
        write!(f, "{}Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
