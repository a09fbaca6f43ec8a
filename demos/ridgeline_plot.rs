extern crate ridgeline;
extern crate color_eyre;

use std::env;
use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use ridgeline::{load_runtime_conf, CONF_ENV_VAR};
use ridgeline::pipeline::{confirmation_line, run_pipeline};
use ridgeline::visualize::ridgeline::PlottersRenderer;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let conf_path = env::var_os(CONF_ENV_VAR).map(PathBuf::from);
    let mut runtime_conf = load_runtime_conf(conf_path.as_deref())?;
    if let Some(output_folder) = env::args_os().nth(1) {
        runtime_conf.output.directory = Some(PathBuf::from(output_folder));
    }

    let output = run_pipeline(&runtime_conf, &PlottersRenderer)?;
    println!("{}", confirmation_line(&output));

    Ok(())
}
