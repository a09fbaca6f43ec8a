extern crate serde_yaml;

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::io::OutputConf;
use crate::synthesis::synthesis_parameters::SynthesisParameters;
use crate::visualize::ridgeline_style::RidgelineStyle;

pub mod io;
pub mod numerics;
pub mod pipeline;
pub mod synthesis;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub const CONF_ENV_VAR: &str = "RIDGELINE_CONF";

#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RuntimeConf {
    pub synthesis: SynthesisParameters,
    pub style: RidgelineStyle,
    pub output: OutputConf
}

/// Loads the runtime configuration. Without a path every value takes its default;
/// a YAML file only needs to name the values it overrides.
pub fn load_runtime_conf(path: Option<&Path>) -> Result<RuntimeConf> {
    match path {
        None => Ok(RuntimeConf::default()),
        Some(p) => {
            let contents = fs::read_to_string(p).wrap_err_with(|| format!("could not read runtime conf {}", p.display()))?;
            parse_runtime_conf(&contents).wrap_err_with(|| format!("malformed runtime conf {}", p.display()))
        }
    }
}

pub fn parse_runtime_conf(contents: &str) -> Result<RuntimeConf> {
    if contents.trim().is_empty() {
        return Ok(RuntimeConf::default());
    }
    let conf = serde_yaml::from_str::<RuntimeConf>(contents)?;
    Ok(conf)
}
