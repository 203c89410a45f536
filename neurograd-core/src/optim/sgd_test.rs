use super::SgdOptimizer;
use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::{Optimizer, OptimizerState};
use approx::assert_relative_eq;

#[test]
fn test_sgd_step_hand_computed() {
    let a = Parameter::new(1.0);
    let b = Parameter::new(-2.0);
    a.set_grad(0.5);
    b.set_grad(-4.0);
    let mut optimizer = SgdOptimizer::new(vec![a.clone(), b.clone()], 0.1).unwrap();
    optimizer.step().unwrap();
    assert_relative_eq!(a.data(), 0.95);
    assert_relative_eq!(b.data(), -1.6);
    // Gradients are left for the caller to clear.
    assert_eq!(a.grad(), 0.5);
}

#[test]
fn test_sgd_zero_grad() {
    let a = Parameter::new(1.0);
    a.set_grad(3.0);
    let mut optimizer = SgdOptimizer::new(vec![a.clone()], 0.1).unwrap();
    optimizer.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_sgd_invalid_learning_rate() {
    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            SgdOptimizer::new(vec![Parameter::new(1.0)], lr),
            Err(NeuroGradError::ConfigurationError(_))
        ));
    }
    let mut optimizer = SgdOptimizer::new(Vec::<Parameter>::new(), 0.1).unwrap();
    assert!(optimizer.set_learning_rate(-1.0).is_err());
    optimizer.set_learning_rate(0.5).unwrap();
    assert_eq!(optimizer.learning_rate(), 0.5);
}

#[test]
fn test_sgd_state_dict() {
    let mut optimizer = SgdOptimizer::new(vec![Parameter::new(1.0)], 0.1).unwrap();
    assert_eq!(optimizer.state_dict(), OptimizerState::Sgd);
    assert!(optimizer.load_state_dict(&OptimizerState::Sgd).is_ok());
    let foreign = OptimizerState::Momentum {
        velocities: vec![0.0],
    };
    assert!(matches!(
        optimizer.load_state_dict(&foreign),
        Err(NeuroGradError::UnsupportedOperation(_))
    ));
}
