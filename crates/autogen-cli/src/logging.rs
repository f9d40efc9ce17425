//! tracing-subscriber setup for the binary

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{CliError, Result};

/// Crates whose logs follow the verbosity flags; everything else logs errors only.
const WORKSPACE_TARGETS: &[&str] = &[
    "autogen",
    "autogen_cli",
    "autogen_core",
    "autogen_typescript",
    "autogen_bindgen",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Copy, Debug)]
pub struct LogOptions {
    pub verbose: u8,
    pub quiet: bool,
    pub level: Option<LogLevel>,
    pub format: LogFormat,
}

impl LogOptions {
    /// Level for workspace crates: `--log` wins, then `--quiet`, then `-v` count.
    pub fn workspace_level(&self) -> LogLevel {
        if let Some(level) = self.level {
            level
        } else if self.quiet {
            LogLevel::Error
        } else {
            match self.verbose {
                0 => LogLevel::Info,
                1 => LogLevel::Debug,
                _ => LogLevel::Trace,
            }
        }
    }

    pub fn directives(&self) -> String {
        let level = self.workspace_level().as_str();
        std::iter::once("error".to_string())
            .chain(
                WORKSPACE_TARGETS
                    .iter()
                    .map(|target| format!("{target}={level}")),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// ANSI colors only on a terminal and only when `NO_COLOR` is unset.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

pub fn setup_logging(options: LogOptions) -> Result<()> {
    let filter = EnvFilter::try_new(options.directives())
        .map_err(|e| CliError::Logging(format!("invalid log filter: {e}")))?;

    let formatter = tracing_subscriber::fmt::layer()
        .with_ansi(use_color())
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    let result = match options.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(formatter.compact())
            .with(filter)
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(formatter.json())
            .with(filter)
            .try_init(),
    };

    result.map_err(|e| CliError::Logging(format!("failed to initialize logging: {e}")))?;

    match options.workspace_level() {
        LogLevel::Trace => tracing::info!("Extra verbose logging enabled."),
        LogLevel::Debug => tracing::info!("Slightly verbose logging enabled."),
        _ => {}
    }

    Ok(())
}
