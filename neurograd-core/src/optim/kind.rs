use crate::error::NeuroGradError;
use crate::nn::parameter::Parameter;
use crate::optim::adam::{AdamOptimizer, DEFAULT_BETA1, DEFAULT_BETA2, DEFAULT_EPS};
use crate::optim::momentum::{MomentumOptimizer, DEFAULT_MOMENTUM_BETA};
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::sgd::SgdOptimizer;

/// Update rule selected by a training configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OptimizerKind {
    #[default]
    Sgd,
    Momentum {
        beta: f64,
    },
    Adam {
        beta1: f64,
        beta2: f64,
        eps: f64,
    },
}

impl OptimizerKind {
    /// Momentum with the default beta.
    pub fn momentum() -> Self {
        OptimizerKind::Momentum {
            beta: DEFAULT_MOMENTUM_BETA,
        }
    }

    /// Adam with the default betas and epsilon.
    pub fn adam() -> Self {
        OptimizerKind::Adam {
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            eps: DEFAULT_EPS,
        }
    }

    /// Builds a fresh optimizer (zeroed state) over `params`.
    pub fn build(
        &self,
        params: Vec<Parameter>,
        lr: f64,
    ) -> Result<Box<dyn Optimizer>, NeuroGradError> {
        Ok(match *self {
            OptimizerKind::Sgd => Box::new(SgdOptimizer::new(params, lr)?),
            OptimizerKind::Momentum { beta } => Box::new(MomentumOptimizer::new(params, lr, beta)?),
            OptimizerKind::Adam { beta1, beta2, eps } => {
                Box::new(AdamOptimizer::new(params, lr, beta1, beta2, eps)?)
            }
        })
    }
}
