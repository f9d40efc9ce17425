//! Diagnostic and error reporting utilities

use crate::{CliError, Result};

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// Print syntax errors with their source excerpt. Returns false when the
/// error has no source context and should be logged instead.
pub fn render_cli_error(err: &CliError) -> bool {
    match err.as_parse_error() {
        Some(parse) => {
            eprintln!("{:?}", miette::Report::new(parse.clone()));
            true
        }
        None => false,
    }
}
