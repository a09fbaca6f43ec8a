use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing::info;

use crate::RuntimeConf;
use crate::io::write_png;
use crate::synthesis::{seeded_rng, synthesize_features};
use crate::synthesis::feature_table::FeatureTable;
use crate::visualize::RidgelineRenderer;

#[derive(Debug)]
pub struct PipelineOutput {
    pub table: FeatureTable,
    pub path: PathBuf
}

/// Seed, synthesize, render, write. The generator lives only for this call.
pub fn run_pipeline<R: RidgelineRenderer>(runtime_conf: &RuntimeConf, renderer: &R) -> Result<PipelineOutput> {
    let mut rng = seeded_rng(runtime_conf.synthesis.seed);
    let table = synthesize_features(&mut rng, &runtime_conf.synthesis)?;
    info!(parameters = %runtime_conf.synthesis, "synthesized features");

    let png = renderer.render(&table, &runtime_conf.style)?;
    let path = write_png(&png, &runtime_conf.output.resolve_directory(), &runtime_conf.output.file_name)?;

    Ok(PipelineOutput { table, path })
}

pub fn confirmation_line(output: &PipelineOutput) -> String {
    format!("PNG saved: {}", output.path.display())
}
