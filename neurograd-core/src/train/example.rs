/// Expected output for one training example.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Target {
    /// The target components, one per network output.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Target::Scalar(t) => std::slice::from_ref(t),
            Target::Vector(v) => v,
        }
    }

    /// The first component, used for accuracy and MAE.
    pub fn first(&self) -> Option<f64> {
        self.as_slice().first().copied()
    }
}

impl From<f64> for Target {
    fn from(t: f64) -> Self {
        Target::Scalar(t)
    }
}

impl From<Vec<f64>> for Target {
    fn from(t: Vec<f64>) -> Self {
        Target::Vector(t)
    }
}

/// One `(inputs, target)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub inputs: Vec<f64>,
    pub target: Target,
}

impl Example {
    pub fn new(inputs: Vec<f64>, target: impl Into<Target>) -> Self {
        Example {
            inputs,
            target: target.into(),
        }
    }
}
