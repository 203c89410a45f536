use super::relu_op;
use crate::autograd::check_grad;
use crate::value::Value;

#[test]
fn test_relu_forward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in inputs.iter().zip(expected.iter()) {
        let out = relu_op(&Value::new(*x));
        assert_eq!(out.data(), *e);
        assert_eq!(out.op_label(), "ReLU");
    }
}

#[test]
fn test_relu_backward_positive() {
    let a = Value::new(1.5);
    let b = a.relu();
    b.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_relu_backward_negative_and_zero() {
    for x in [-0.5, 0.0] {
        let a = Value::new(x);
        let b = a.relu();
        b.backward();
        assert_eq!(a.grad(), 0.0, "relu gradient must be 0 at x = {}", x);
    }
}

#[test]
fn test_relu_scales_upstream_gradient() {
    let a = Value::new(2.0);
    let b = a.relu() * 3.0;
    b.backward();
    assert_eq!(a.grad(), 3.0);
}

#[test]
fn test_relu_grad_check_away_from_kink() {
    let f = |v: &[Value]| relu_op(&v[0]);
    check_grad(f, &[0.8], 1e-6, 1e-4).unwrap();
    check_grad(f, &[-0.8], 1e-6, 1e-4).unwrap();
}
