//! autogen: generate `wasm_bindgen` bindings from TypeScript.
//!
//! # Usage
//!
//! ```bash
//! # Map ts/index.ts (and everything it imports) into ./output
//! autogen
//!
//! # Use another config file, with debug logging
//! autogen -v --input web/autogen.toml
//!
//! # Rewrite the config file from the template
//! autogen --regenerate
//! ```

use autogen_cli::{
    diagnostics::{render_cli_error, setup_error_reporting},
    generate::{generate_command, GenerateArgs},
    logging::{setup_logging, LogFormat, LogLevel, LogOptions},
    CliError, Result,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    name = "autogen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate wasm_bindgen bindings from TypeScript declarations"
)]
struct Cli {
    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long, default_value = autogen_cli::config::DEFAULT_CONFIG_FILE)]
    input: PathBuf,

    /// Regenerate the config file
    #[arg(short, long)]
    regenerate: bool,

    /// Working directory
    #[arg(short = 'C', long)]
    directory: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_error_reporting()?;

    setup_logging(LogOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        level: cli.log,
        format: cli.log_format,
    })?;

    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir).map_err(CliError::Io)?;
    }

    info!("Starting autogen.");
    debug!("CLI settings: {:?}", cli);

    let args = GenerateArgs {
        config: cli.input.clone(),
        regenerate: cli.regenerate,
    };

    match generate_command(&args) {
        Ok(_) => {
            info!("Done.");
            Ok(())
        }
        Err(e) => {
            if !render_cli_error(&e) {
                error!("{}", e);
            }
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}
