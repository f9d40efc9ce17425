//! The generate pipeline: config, source mapping, statement mapping, output.

use std::path::PathBuf;

use autogen_bindgen::map_statements;
use autogen_core::Context;
use autogen_typescript::map_files;
use tracing::{debug, info, warn};

use crate::config::{GenerateConfig, DEFAULT_CONFIG_FILE};
use crate::output::save_statements;
use crate::Result;

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Config file to load (created from the template when missing)
    pub config: PathBuf,
    /// Rewrite the config file from the template before loading it
    pub regenerate: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            regenerate: false,
        }
    }
}

/// Load (or create) the config file named by `args`.
pub fn prepare_config(args: &GenerateArgs) -> Result<GenerateConfig> {
    if args.regenerate {
        info!("Regenerating config file.");
        GenerateConfig::write_template(&args.config)?;
        info!("Config file regenerated.");
    } else if args.config.exists() {
        info!("Config file found.");
        info!("Loading config from {}", args.config.display());
    } else {
        warn!("Config file not found. Generating default config.");
        GenerateConfig::write_template(&args.config)?;
        info!("Config file generated at {}.", args.config.display());
    }

    let config = GenerateConfig::load_from_file(&args.config)?;
    info!("Config loaded.");
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Run the whole pipeline and return the paths of the written files.
pub fn generate_command(args: &GenerateArgs) -> Result<Vec<PathBuf>> {
    let config = prepare_config(args)?;

    info!("Mapping files...");
    let files = map_files(&config.input.index_file)
        .context("Error source mapping out typescript imports")?;
    info!("Files mapped.");

    info!("Mapping statements");
    let mapped = map_statements(&files).context("Error mapping out typescript statements")?;
    info!("Statements mapped.");

    info!("Saving statements");
    let written = save_statements(&mapped, &config).context("Failed to save statements")?;
    info!(
        "Wrote {} files to {}",
        written.len(),
        config.output.directory.display()
    );

    Ok(written)
}
