use super::Mlp;
use crate::error::NeuroGradError;
use crate::nn::activation::Activation;
use crate::nn::layers::{Layer, Neuron};
use crate::nn::module::Module;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn network() -> Mlp {
    let mut rng = StdRng::seed_from_u64(42);
    Mlp::new(3, &[4, 4, 1], &mut rng).unwrap()
}

#[test]
fn test_shape_and_parameter_count() {
    let mlp = network();
    // (3*4 + 4) + (4*4 + 4) + (4*1 + 1)
    assert_eq!(mlp.num_parameters(), 41);
    assert_eq!(mlp.nin(), 3);
    assert_eq!(mlp.nout(), 1);
    assert_eq!(mlp.call(&[2.0, 3.0, -1.0]).unwrap().len(), 1);
}

#[test]
fn test_hidden_relu_and_linear_output() {
    let mlp = network();
    let acts: Vec<Activation> = mlp
        .layers()
        .iter()
        .map(|l| l.neurons()[0].activation())
        .collect();
    assert_eq!(acts, vec![Activation::Relu, Activation::Relu, Activation::Linear]);
    assert_eq!(
        mlp.to_string(),
        "MLP of [Layer of [ReLUNeuron(3), ReLUNeuron(3), ReLUNeuron(3), ReLUNeuron(3)], \
         Layer of [ReLUNeuron(4), ReLUNeuron(4), ReLUNeuron(4), ReLUNeuron(4)], \
         Layer of [LinearNeuron(4)]]"
    );
}

#[test]
fn test_custom_activations() {
    let mut rng = StdRng::seed_from_u64(3);
    let mlp =
        Mlp::with_activations(2, &[3, 1], Activation::Tanh, Activation::Sigmoid, &mut rng).unwrap();
    let out = mlp.call(&[0.5, -0.5]).unwrap();
    assert!(out[0].data() > 0.0 && out[0].data() < 1.0);
    assert_eq!(mlp.layers()[0].neurons()[0].activation(), Activation::Tanh);
}

#[test]
fn test_parameter_order_is_stable() {
    let mlp = network();
    let first = mlp.parameters();
    let second = mlp.parameters();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert!(a.value().ptr_eq(b.value()));
    }
    let named = mlp.named_parameters();
    assert_eq!(named[0].0, "layers.0.neurons.0.weight.0");
    assert_eq!(named[40].0, "layers.2.neurons.0.bias");
}

#[test]
fn test_backward_reaches_every_parameter_and_zero_grad_clears() {
    let mlp = Mlp::from_layers(vec![
        Layer::from_neurons(vec![
            Neuron::from_weights(&[1.0, 2.0], 0.5, Activation::Relu),
            Neuron::from_weights(&[-1.0, 1.0], 0.5, Activation::Relu),
        ])
        .unwrap(),
        Layer::from_neurons(vec![Neuron::from_weights(&[1.0, 1.0], 0.0, Activation::Linear)])
            .unwrap(),
    ])
    .unwrap();
    let out = mlp.call(&[1.0, 1.0]).unwrap();
    // h0 = relu(3.5) = 3.5, h1 = relu(0.5) = 0.5, out = 4
    assert_relative_eq!(out[0].data(), 4.0);
    out[0].backward();
    assert!(mlp.parameters().iter().all(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_input_width_mismatch() {
    let mlp = network();
    assert_eq!(
        mlp.call(&[1.0, 2.0]).unwrap_err(),
        NeuroGradError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_invalid_configuration() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Mlp::new(3, &[], &mut rng),
        Err(NeuroGradError::ConfigurationError(_))
    ));
    assert!(matches!(
        Mlp::new(3, &[4, 0, 1], &mut rng),
        Err(NeuroGradError::ConfigurationError(_))
    ));
    let unchained = Mlp::from_layers(vec![
        Layer::new(2, 3, Activation::Relu, &mut rng).unwrap(),
        Layer::new(2, 1, Activation::Linear, &mut rng).unwrap(),
    ]);
    assert!(matches!(unchained, Err(NeuroGradError::ShapeMismatch { .. })));
}

#[test]
fn test_same_seed_same_network() {
    let a = network();
    let b = network();
    let da: Vec<f64> = a.parameters().iter().map(|p| p.data()).collect();
    let db: Vec<f64> = b.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(da, db);
}
