use crate::error::NeuroGradError;
use crate::nn::activation::Activation;
use crate::nn::init::WeightInit;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: a chain of fully connected [`Layer`]s.
///
/// Layer `k` takes the output width of layer `k - 1` as its input width; the
/// first layer takes `nin`. Cloning an `Mlp` shares its parameters with the
/// original.
///
/// # Example
/// ```
/// use neurograd_core::nn::{Mlp, Module};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mlp = Mlp::new(3, &[4, 4, 1], &mut rng).unwrap();
/// assert_eq!(mlp.num_parameters(), 41);
/// assert_eq!(mlp.call(&[1.0, -2.0, 0.5]).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// ReLU on every hidden layer, linear output layer.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_activations(
            nin,
            sizes,
            Activation::from_nonlinear(true),
            Activation::from_nonlinear(false),
            rng,
        )
    }

    /// Chooses the hidden-layer and output-layer activations.
    pub fn with_activations<R: Rng + ?Sized>(
        nin: usize,
        sizes: &[usize],
        hidden: Activation,
        output: Activation,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        Self::with_init(nin, sizes, hidden, output, WeightInit::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        sizes: &[usize],
        hidden: Activation,
        output: Activation,
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if sizes.is_empty() {
            return Err(NeuroGradError::ConfigurationError(
                "Mlp needs at least one layer size".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(sizes.len());
        let mut fan_in = nin;
        for (k, &nout) in sizes.iter().enumerate() {
            let activation = if k + 1 == sizes.len() { output } else { hidden };
            layers.push(Layer::with_init(fan_in, nout, activation, init, &mut *rng)?);
            fan_in = nout;
        }
        log::debug!(
            "Built Mlp {} -> {:?} ({} parameters)",
            nin,
            sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    /// Builds a network from existing layers whose widths must chain.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NeuroGradError> {
        if layers.is_empty() {
            return Err(NeuroGradError::ConfigurationError(
                "Mlp needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(NeuroGradError::shape_mismatch(
                    pair[0].nout(),
                    pair[1].nin(),
                    "Mlp::from_layers",
                ));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", k, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", layer)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
