use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional YAML run config supplying default output paths.
///
/// CLI flags override these values; these values override the built-in
/// defaults. Intended to live next to the roster files it describes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Default report output path.
    #[serde(default = "default_report_path")]
    pub out: PathBuf,
    /// Optional JSON export path.
    #[serde(default)]
    pub json: Option<PathBuf>,
}

fn default_report_path() -> PathBuf {
    PathBuf::from("./report.txt")
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            out: default_report_path(),
            json: None,
        }
    }
}

impl RunConfig {
    /// Load config from YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;
        let config: Self =
            serde_yaml::from_str(&text).with_context(|| format!("parse config {path:?}"))?;
        Ok(config)
    }
}
