//! Read-only snapshots of a network for display or debugging.
//!
//! Snapshots copy plain numbers out of the graph. Capturing one never changes
//! a parameter's value or gradient.

use crate::error::NeuroGradError;
use crate::nn::{Activation, Mlp, Module, Neuron};
use crate::value::Value;

/// One named parameter with its current value and gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSnapshot {
    pub name: String,
    pub value: f64,
    pub grad: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeuronSnapshot {
    pub weights: Vec<f64>,
    pub weight_grads: Vec<f64>,
    pub bias: f64,
    pub bias_grad: f64,
    pub activation: Activation,
    /// Output for the input given to [`NetworkSnapshot::with_activations`].
    pub output: Option<f64>,
}

impl NeuronSnapshot {
    fn capture(neuron: &Neuron, output: Option<f64>) -> Self {
        NeuronSnapshot {
            weights: neuron.weights().iter().map(|w| w.data()).collect(),
            weight_grads: neuron.weights().iter().map(|w| w.grad()).collect(),
            bias: neuron.bias().data(),
            bias_grad: neuron.bias().grad(),
            activation: neuron.activation(),
            output,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerSnapshot {
    pub neurons: Vec<NeuronSnapshot>,
}

/// Topology, parameters and optionally activations and loss of an [`Mlp`].
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    pub inputs: Option<Vec<f64>>,
    pub layers: Vec<LayerSnapshot>,
    pub parameters: Vec<ParameterSnapshot>,
    pub loss: Option<f64>,
}

impl NetworkSnapshot {
    /// Captures topology and parameter values/gradients.
    pub fn capture(mlp: &Mlp) -> Self {
        let layers = mlp
            .layers()
            .iter()
            .map(|layer| LayerSnapshot {
                neurons: layer
                    .neurons()
                    .iter()
                    .map(|n| NeuronSnapshot::capture(n, None))
                    .collect(),
            })
            .collect();
        NetworkSnapshot {
            inputs: None,
            layers,
            parameters: parameter_snapshots(mlp),
            loss: None,
        }
    }

    /// Like [`NetworkSnapshot::capture`], also recording every neuron's output for `inputs`.
    ///
    /// The forward pass builds a throwaway graph; parameter gradients are untouched.
    pub fn with_activations(mlp: &Mlp, inputs: &[f64]) -> Result<Self, NeuroGradError> {
        let mut current: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
        let mut layers = Vec::with_capacity(mlp.layers().len());
        for layer in mlp.layers() {
            let outputs = layer.forward(&current)?;
            let neurons = layer
                .neurons()
                .iter()
                .zip(&outputs)
                .map(|(n, out)| NeuronSnapshot::capture(n, Some(out.data())))
                .collect();
            layers.push(LayerSnapshot { neurons });
            // Detach so the next layer's graph does not grow from this one.
            current = outputs.iter().map(|v| Value::new(v.data())).collect();
        }
        Ok(NetworkSnapshot {
            inputs: Some(inputs.to_vec()),
            layers,
            parameters: parameter_snapshots(mlp),
            loss: None,
        })
    }

    pub fn with_loss(mut self, loss: f64) -> Self {
        self.loss = Some(loss);
        self
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn neurons_per_layer(&self) -> Vec<usize> {
        self.layers.iter().map(|l| l.neurons.len()).collect()
    }

    /// Outputs of the last layer, if activations were recorded.
    pub fn outputs(&self) -> Option<Vec<f64>> {
        self.layers
            .last()?
            .neurons
            .iter()
            .map(|n| n.output)
            .collect()
    }

    /// Euclidean norm of all parameter gradients.
    pub fn gradient_norm(&self) -> f64 {
        self.parameters
            .iter()
            .map(|p| p.grad * p.grad)
            .sum::<f64>()
            .sqrt()
    }
}

fn parameter_snapshots(mlp: &Mlp) -> Vec<ParameterSnapshot> {
    mlp.named_parameters()
        .into_iter()
        .map(|(name, p)| ParameterSnapshot {
            name,
            value: p.data(),
            grad: p.grad(),
        })
        .collect()
}

#[cfg(test)]
#[path = "inspect_test.rs"]
mod tests;
