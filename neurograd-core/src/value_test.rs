use super::*;
use approx::assert_relative_eq;

#[test]
fn test_leaf_defaults() {
    let v = Value::new(4.0);
    assert_eq!(v.data(), 4.0);
    assert_eq!(v.grad(), 0.0);
    assert!(v.is_leaf());
    assert_eq!(v.op(), BackwardOp::Leaf);
    assert_eq!(v.op_label(), "");
    assert!(v.parents().is_empty());
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(a.id(), b.id());
    b.set_data(9.0);
    assert_eq!(a.data(), 9.0);
    assert_ne!(a.id(), Value::new(9.0).id());
}

#[test]
fn test_diamond_graph_gradients() {
    let x = Value::new(2.0);
    let y = Value::new(3.0);
    let z = (&x * &y + x.pow(2.0)).relu();
    z.backward();

    assert_eq!(z.data(), 10.0);
    assert_eq!(z.grad(), 1.0);
    assert_eq!(x.grad(), 7.0);
    assert_eq!(y.grad(), 2.0);
}

#[test]
fn test_backward_on_isolated_leaf() {
    let a = Value::new(3.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_unreachable_branch_is_untouched() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let used = &a * 3.0;
    let unused = &b * 5.0;
    used.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(unused.grad(), 0.0);
}

#[test]
fn test_leaf_gradients_accumulate_across_backward_calls() {
    let w = Value::new(0.5);
    let first = &w * 2.0;
    let second = &w * 3.0;
    first.backward();
    second.backward();
    assert_eq!(w.grad(), 5.0);
}

#[test]
fn test_repeated_backward_after_zero_grad_is_identical() {
    let x = Value::new(0.3);
    let y = Value::new(-1.1);
    let h = (&x * &y).tanh();
    let out = &h * &h + x.sigmoid();

    x.zero_grad();
    y.zero_grad();
    out.backward();
    let first = (x.grad(), y.grad(), h.grad());

    x.zero_grad();
    y.zero_grad();
    out.backward();
    let second = (x.grad(), y.grad(), h.grad());

    assert_eq!(first, second);
}

#[test]
fn test_shared_interior_node_not_double_counted() {
    let w = Value::new(2.0);
    let h = &w * 3.0;
    let loss_a = &h * 1.0;
    let loss_b = &h * 10.0;
    loss_a.backward();
    loss_b.backward();
    // dA/dw = 3, dB/dw = 30
    assert_relative_eq!(w.grad(), 33.0);
}

#[test]
fn test_topological_order_parents_first() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = &a * &b;
    let d = &c + &a;
    let e = d.tanh() * c.clone();
    let order = e.topological_order();
    let position = |v: &Value| order.iter().position(|n| n.ptr_eq(v)).unwrap();
    for node in &order {
        for parent in node.parents() {
            assert!(position(node) > position(&parent));
        }
    }
    assert!(order.last().unwrap().ptr_eq(&e));
}

#[test]
fn test_debug_and_display() {
    let v = Value::new(1.5);
    assert_eq!(v.to_string(), "Value(data=1.5, grad=0)");
    let w = &v * 2.0;
    let dbg = format!("{:?}", w);
    assert!(dbg.contains("data: 3.0"));
    assert!(dbg.contains("op: \"*\""));
}
