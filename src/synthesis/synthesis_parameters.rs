use std::fmt;
use serde::{Deserialize, Serialize};

use crate::Float;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct SynthesisParameters {
    pub seed: u64,
    pub feature_count: usize,
    pub samples_per_feature: usize,
    /// Mean of feature i (0-based) is i*mean_step
    pub mean_step: Float,
    pub std_dev: Float
}

impl SynthesisParameters {
    pub fn mean_of(&self, feature_index: usize) -> Float {
        feature_index as Float*self.mean_step
    }
}

impl Default for SynthesisParameters {
    fn default() -> SynthesisParameters {
        SynthesisParameters {
            seed: 1978,
            feature_count: 6,
            samples_per_feature: 100,
            mean_step: 2.0,
            std_dev: 2.0
        }
    }
}

impl fmt::Display for SynthesisParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "seed_{}_n_{}_samples_{}_step_{}_sd_{}", self.seed, self.feature_count, self.samples_per_feature, self.mean_step, self.std_dev)
    }
}
