use super::Neuron;
use crate::error::NeuroGradError;
use crate::nn::activation::Activation;
use crate::nn::module::Module;
use crate::value::Value;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_forward_hand_computed() {
    let neuron = Neuron::from_weights(&[0.5, -1.0], 0.25, Activation::Linear);
    let out = neuron.call(&[2.0, 3.0]).unwrap();
    assert_eq!(out.len(), 1);
    // 0.25 + 0.5*2 - 1*3
    assert_relative_eq!(out[0].data(), -1.75);
}

#[test]
fn test_relu_neuron_clamps_and_gates_gradient() {
    let neuron = Neuron::from_weights(&[1.0], -5.0, Activation::Relu);
    let out = neuron.activate(&[Value::new(2.0)]).unwrap();
    assert_eq!(out.data(), 0.0);
    out.backward();
    assert_eq!(neuron.weights()[0].grad(), 0.0);
    assert_eq!(neuron.bias().grad(), 0.0);
}

#[test]
fn test_gradients_reach_weights_and_bias() {
    let neuron = Neuron::from_weights(&[2.0, -3.0], 1.0, Activation::Tanh);
    let x = [Value::new(0.1), Value::new(0.2)];
    let out = neuron.activate(&x).unwrap();
    out.backward();
    let t = (1.0_f64 + 0.2 - 0.6).tanh();
    let dt = 1.0 - t * t;
    assert_relative_eq!(neuron.bias().grad(), dt, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[0].grad(), dt * 0.1, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[1].grad(), dt * 0.2, epsilon = 1e-12);
    assert_relative_eq!(x[1].grad(), dt * -3.0, epsilon = 1e-12);
}

#[test]
fn test_wrong_input_width_fails() {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::new(3, Activation::Relu, &mut rng).unwrap();
    let err = neuron.call(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        NeuroGradError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_random_init_ranges_and_zero_bias() {
    let mut rng = StdRng::seed_from_u64(5);
    let neuron = Neuron::new(16, Activation::Relu, &mut rng).unwrap();
    assert_eq!(neuron.nin(), 16);
    assert_eq!(neuron.bias().data(), 0.0);
    assert!(neuron
        .weights()
        .iter()
        .all(|w| w.is_leaf() && (-1.0..1.0).contains(&w.data())));
}

#[test]
fn test_parameter_order_and_names() {
    let neuron = Neuron::from_weights(&[1.0, 2.0], 3.0, Activation::Linear);
    let data: Vec<f64> = neuron.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(data, vec![1.0, 2.0, 3.0]);
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
    assert_eq!(neuron.to_string(), "LinearNeuron(2)");
}

#[test]
fn test_nonlinear_flag_selects_relu_or_identity() {
    let nonlinear = Activation::from_nonlinear(true);
    let linear = Activation::from_nonlinear(false);
    assert_eq!(nonlinear, Activation::Relu);
    assert_eq!(linear, Activation::Linear);
    assert!(nonlinear.is_nonlinear());
    assert!(!linear.is_nonlinear());

    // bias - 2 is negative, so only the identity unit passes it through
    let relu_unit = Neuron::from_weights(&[1.0], -3.0, nonlinear);
    let identity_unit = Neuron::from_weights(&[1.0], -3.0, linear);
    assert_eq!(relu_unit.call(&[1.0]).unwrap()[0].data(), 0.0);
    assert_eq!(identity_unit.call(&[1.0]).unwrap()[0].data(), -2.0);
}
