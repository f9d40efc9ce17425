//! Library side of the `autogen` binary: configuration, logging setup and the
//! generate pipeline (map files, map statements, save statements).

pub mod config;
pub mod diagnostics;
pub mod generate;
pub mod logging;
pub mod output;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error(transparent)]
        Core(#[from] autogen_core::Error),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Logging error: {0}")]
        Logging(String),
    }

    impl CliError {
        pub fn as_parse_error(&self) -> Option<&autogen_core::ParseError> {
            match self {
                CliError::Core(err) => err.as_parse_error(),
                _ => None,
            }
        }
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
