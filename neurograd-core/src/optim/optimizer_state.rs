use crate::error::NeuroGradError;

/// Represents the auxiliary state of an optimizer.
///
/// Per-parameter buffers are stored in the same order as the optimizer's
/// parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptimizerState {
    /// Plain gradient descent keeps no state.
    #[default]
    Sgd,
    Momentum {
        velocities: Vec<f64>,
    },
    Adam {
        /// First moment estimates.
        m: Vec<f64>,
        /// Second moment estimates.
        v: Vec<f64>,
        /// Global step counter used for bias correction.
        iterations: u64,
    },
}

impl OptimizerState {
    pub fn kind(&self) -> &'static str {
        match self {
            OptimizerState::Sgd => "sgd",
            OptimizerState::Momentum { .. } => "momentum",
            OptimizerState::Adam { .. } => "adam",
        }
    }

    pub(crate) fn unsupported(&self, expected: &str) -> NeuroGradError {
        NeuroGradError::UnsupportedOperation(format!(
            "cannot load {} optimizer state into a {} optimizer",
            self.kind(),
            expected
        ))
    }
}

/// Checks a saved buffer against the live parameter count.
pub(crate) fn check_buffer_len(
    buffer: &[f64],
    num_params: usize,
    operation: &str,
) -> Result<(), NeuroGradError> {
    if buffer.len() != num_params {
        log::warn!(
            "{}: state holds {} entries but the optimizer has {} parameters",
            operation,
            buffer.len(),
            num_params
        );
        return Err(NeuroGradError::shape_mismatch(num_params, buffer.len(), operation));
    }
    Ok(())
}
