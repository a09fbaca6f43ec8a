use std::env;
use std::fs;
use std::path::{Path,PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const OUTPUT_FILE_NAME: &str = "示例_4.png";
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct OutputConf {
    /// None writes next to the running executable
    pub directory: Option<PathBuf>,
    pub file_name: String
}

impl OutputConf {
    pub fn resolve_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.clone(),
            None => default_output_dir()
        }
    }
}

impl Default for OutputConf {
    fn default() -> OutputConf {
        OutputConf {
            directory: None,
            file_name: OUTPUT_FILE_NAME.to_string()
        }
    }
}

/// Directory of the running executable, or the working directory if that cannot be determined.
pub fn default_output_dir() -> PathBuf {
    env::current_exe().ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn is_png(bytes: &[u8]) -> bool {
    bytes.len() >= PNG_SIGNATURE.len() && bytes[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Writes `bytes` to `output_folder/file_name`, replacing an existing file, and returns the absolute path.
pub fn write_png(bytes: &[u8], output_folder: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_folder).wrap_err_with(|| format!("could not create output folder {}", output_folder.display()))?;
    let path = output_folder.join(file_name);
    fs::write(&path, bytes).wrap_err_with(|| format!("could not write {}", path.display()))?;
    let absolute_path = fs::canonicalize(&path).wrap_err_with(|| format!("could not resolve {}", path.display()))?;
    info!(path = %absolute_path.display(), size = bytes.len(), "wrote png");
    Ok(absolute_path)
}
