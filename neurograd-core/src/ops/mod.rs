//! # Scalar Operations Module (`ops`)
//!
//! Every operation is a `xxx_op` function that computes the forward value and binds
//! the matching [`BackwardOp`](crate::autograd::BackwardOp) on the output node.
//! Convenience methods on [`Value`](crate::Value) (`relu`, `pow`, `ln`, ...) and the
//! `std::ops` operators delegate to these functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu, sigmoid, tanh.
//! - [`math_elem`]: exp, ln.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};
