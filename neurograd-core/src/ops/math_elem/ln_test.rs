use super::ln_op;
use crate::autograd::check_grad;
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_ln_forward_and_backward() {
    let a = Value::new(std::f64::consts::E);
    let b = ln_op(&a);
    assert_relative_eq!(b.data(), 1.0);
    assert_eq!(b.op_label(), "ln");
    b.backward();
    // d/dx ln(x) = 1/x = 1/e at x=e
    assert_relative_eq!(a.grad(), 1.0 / std::f64::consts::E);
}

#[test]
fn test_ln_out_of_domain() {
    assert!(ln_op(&Value::new(0.0)).data().is_infinite());
    assert!(ln_op(&Value::new(-1.0)).data().is_nan());
}

#[test]
fn test_ln_grad_check() {
    let f = |v: &[Value]| (&v[0] * &v[0] + 1.0).ln();
    check_grad(f, &[0.6], 1e-6, 1e-4).unwrap();
}
