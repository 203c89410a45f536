//! # Value: a node of the scalar computation graph
//!
//! A [`Value`] is a cheap, reference-counted handle (`Rc<RefCell<ValueData>>`) to a
//! single scalar, its accumulated gradient, the operands that produced it and the
//! backward rule bound at construction time.
//!
//! Cloning a `Value` clones the handle, not the node: every clone refers to the same
//! underlying scalar. This is what allows a weight used by several consumers to
//! receive gradient contributions from all of them.
//!
//! ```
//! use neurograd_core::Value;
//!
//! let x = Value::new(2.0);
//! let y = Value::new(3.0);
//! let z = (&x * &y + x.pow(2.0)).relu();
//! z.backward();
//!
//! assert_eq!(z.data(), 10.0);
//! assert_eq!(x.grad(), 7.0);
//! assert_eq!(y.grad(), 2.0);
//! ```

use crate::autograd::graph::topological_sort;
use crate::autograd::BackwardOp;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Internal state of a graph node.
#[derive(Debug)]
pub(crate) struct ValueData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    /// Operands this node was computed from, in operand order.
    pub(crate) parents: Vec<Value>,
    pub(crate) op: BackwardOp,
}

impl Drop for ValueData {
    // Unlinks parent chains iteratively; the default recursive drop overflows the
    // stack on long accumulation chains.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(parent.0) {
                let mut data = cell.into_inner();
                pending.append(&mut data.parents);
            }
        }
    }
}

/// Stable identity of a node, derived from the address of its shared state.
///
/// Two `Value` handles have the same `NodeId` if and only if they refer to the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Handle to a scalar node in the computation graph.
#[derive(Clone)]
pub struct Value(Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a leaf node (no parents) with zero gradient.
    pub fn new(data: f64) -> Self {
        Value::from_op(data, Vec::new(), BackwardOp::Leaf)
    }

    /// Creates an internal node recording its operands and backward rule.
    pub(crate) fn from_op(data: f64, parents: Vec<Value>, op: BackwardOp) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            data,
            grad: 0.0,
            parents,
            op,
        })))
    }

    fn read(&self) -> Ref<'_, ValueData> {
        self.0.borrow()
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read().data
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.read().grad
    }

    /// Overwrites the forward value.
    ///
    /// Only meaningful on leaves (parameters); nodes already built from this one keep
    /// the values captured when they were created.
    pub fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    pub fn set_grad(&self, grad: f64) {
        self.0.borrow_mut().grad = grad;
    }

    /// Adds to this node's gradient (accumulation across consumers).
    pub(crate) fn add_grad(&self, delta: f64) {
        self.0.borrow_mut().grad += delta;
    }

    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Handles to the operands that produced this node.
    pub fn parents(&self) -> Vec<Value> {
        self.read().parents.clone()
    }

    /// The backward rule bound to this node.
    pub fn op(&self) -> BackwardOp {
        self.read().op
    }

    /// Diagnostic tag of the operation that created this node (empty for leaves).
    pub fn op_label(&self) -> String {
        self.read().op.to_string()
    }

    pub fn is_leaf(&self) -> bool {
        self.read().parents.is_empty()
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// All nodes reachable from `self`, parents before children.
    ///
    /// Iterating the result from the end gives the order in which backward rules run.
    pub fn topological_order(&self) -> Vec<Value> {
        topological_sort(self)
    }

    /// Runs reverse-mode differentiation from this node.
    ///
    /// Seeds `self.grad = 1` and invokes every reachable backward rule in reverse
    /// topological order, so a node only propagates once all its consumers have
    /// accumulated into it.
    ///
    /// Interior (non-leaf) gradients of the traversed graph are reset first, which makes
    /// repeated calls on the same graph produce the same contributions. Leaf gradients
    /// are **not** reset: they accumulate across calls, and callers must zero them
    /// (e.g. [`Module::zero_grad`](crate::nn::Module::zero_grad)) before each independent
    /// pass.
    pub fn backward(&self) {
        let order = topological_sort(self);
        log::trace!("backward: {} reachable nodes", order.len());

        for node in order.iter().filter(|n| !n.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);

        for node in order.iter().rev() {
            let (grad, op, parents) = {
                let guard = node.read();
                (guard.grad, guard.op, guard.parents.clone())
            };
            op.propagate(grad, &parents);
        }
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Debug for Value {
    // Parents are not printed: a deep graph would be dumped recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op.to_string())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
