use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a leaf [`Value`] indicating it is a learnable parameter of a Module.
///
/// Cloning a `Parameter` clones the handle: optimizers hold clones of the model's
/// parameters and update the very same nodes the model reads during `forward`.
#[derive(Clone)]
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new parameter holding a fresh leaf with the given value.
    pub fn new(data: f64) -> Self {
        Parameter(Value::new(data))
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

// Allow accessing the underlying Value via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
