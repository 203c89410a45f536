use super::pow_op;
use crate::autograd::check_grad;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_and_backward() {
    let a = Value::new(2.0);
    let b = pow_op(&a, 3.0);
    assert_relative_eq!(b.data(), 8.0);
    assert_eq!(b.op_label(), "^3");
    b.backward();
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert_relative_eq!(a.grad(), 12.0);
}

#[test]
fn test_pow_negative_exponent() {
    let a = Value::new(4.0);
    let b = a.pow(-1.0);
    assert_relative_eq!(b.data(), 0.25);
    b.backward();
    assert_relative_eq!(a.grad(), -1.0 / 16.0);
}

#[test]
fn test_pow_fractional_exponent_grad_check() {
    let f = |v: &[Value]| v[0].pow(0.5);
    check_grad(f, &[2.3], 1e-6, 1e-4).unwrap();
}

#[test]
fn test_pow_grad_check() {
    let f = |v: &[Value]| pow_op(&v[0], 2.0);
    check_grad(f, &[-1.3], 1e-6, 1e-4).unwrap();
}
