extern crate rand;
extern crate rand_distr;

use color_eyre::eyre::{eyre, Result, WrapErr};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Normal,Distribution};
use tracing::debug;

use crate::Float;
use self::feature_table::FeatureTable;
use self::synthesis_parameters::SynthesisParameters;

pub mod feature_table;
pub mod synthesis_parameters;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn feature_name(feature_index: usize) -> String {
    format!("Feature {}", feature_index+1)
}

/// Draws every column from the one stream handed in. Column i is drawn completely before column i+1,
/// so the table only reproduces for the same seed and the same draw order.
pub fn synthesize_features<R: Rng + ?Sized>(rng: &mut R, parameters: &SynthesisParameters) -> Result<FeatureTable> {
    if !(parameters.std_dev.is_finite() && parameters.std_dev >= 0.0) {
        return Err(eyre!("std dev must be finite and non-negative, got {}", parameters.std_dev));
    }

    let mut table = FeatureTable::with_capacity(parameters.feature_count);

    for i in 0..parameters.feature_count {
        let mean = parameters.mean_of(i);
        let normal_distribution = Normal::new(mean, parameters.std_dev)
            .wrap_err_with(|| format!("invalid normal distribution for feature {}: mean {}, std dev {}", i+1, mean, parameters.std_dev))?;
        let samples = normal_distribution.sample_iter(&mut *rng).take(parameters.samples_per_feature).collect::<Vec<Float>>();
        table.push_column(&feature_name(i), samples)?;
    }

    debug!(columns = table.column_count(), rows = table.row_count(), "synthesized feature table");
    Ok(table)
}
