//! `autogen.toml` loading and template generation

use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "autogen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub input: Input,
    pub output: Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    /// The index.ts file to use as the input.
    /// Everything is resolved relative to this file.
    pub index_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    /// The output directory to use.
    pub directory: PathBuf,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            index_file: PathBuf::from("ts/index.ts"),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
        }
    }
}

impl GenerateConfig {
    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        write_creating_parent(path, &content)
    }

    /// Default configuration with a comment above every key.
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# autogen configuration

[input]
# The index.ts file to use as the input.
# Everything is resolved relative to this file.
index_file = {}

[output]
# The output directory to use.
# It is cleared before every run.
directory = {}
"#,
            toml_path(&defaults.input.index_file),
            toml_path(&defaults.output.directory),
        )
    }

    pub fn write_template(path: &Path) -> Result<()> {
        write_creating_parent(path, &Self::template())
    }
}

fn toml_path(path: &Path) -> toml::Value {
    toml::Value::String(path.display().to_string())
}

fn write_creating_parent(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    std::fs::write(path, content)
        .map_err(|e| CliError::Config(format!("Failed to write config file: {}", e)))
}
