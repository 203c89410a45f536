//! Reverse-mode automatic differentiation over scalar [`Value`](crate::Value) graphs.
//!
//! - [`backward_op`]: the per-node backward rule ([`BackwardOp`]) and its local-gradient table.
//! - [`graph`]: topological ordering used by [`Value::backward`](crate::Value::backward).
//! - [`grad_check`]: centered finite-difference verification of analytic gradients.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, numerical_grad, GradCheckError};
