use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Batch configuration: which documents to process and where the
/// artifacts go.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory holding `<name>.tables.json` inputs
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory for generated `.ics` feeds
    #[serde(default = "default_ics_dir")]
    pub ics_dir: PathBuf,

    /// Directory for generated month-data `.json` files
    #[serde(default = "default_json_dir")]
    pub json_dir: PathBuf,

    /// Document names, processed in order
    #[serde(default)]
    pub documents: Vec<String>,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("input")
}

fn default_ics_dir() -> PathBuf {
    PathBuf::from("output/ics")
}

fn default_json_dir() -> PathBuf {
    PathBuf::from("output/json")
}

impl Config {
    pub fn tables_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(format!("{name}.tables.json"))
    }

    pub fn ics_path(&self, name: &str) -> PathBuf {
        self.ics_dir.join(format!("{name}.ics"))
    }

    pub fn json_path(&self, name: &str) -> PathBuf {
        self.json_dir.join(format!("{name}.json"))
    }
}

/// Load the batch config from a TOML file.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with the documents to process:\n\n\
            input_dir = \"input\"\n\
            documents = [\"2023\"]",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}
