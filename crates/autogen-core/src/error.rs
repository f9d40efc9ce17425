use std::path::{Path, PathBuf};
use std::result;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A TypeScript syntax error with enough context to render the offending source.
#[derive(Error, Debug, Clone, Diagnostic)]
#[error("Failed to parse {}: {message}", path.display())]
#[diagnostic(
    code(autogen::syntax_error),
    help("Only TypeScript modules can be mapped; check the syntax near the label")
)]
pub struct ParseError {
    pub path: PathBuf,
    pub message: String,
    #[source_code]
    pub src: String,
    #[label("syntax error here")]
    pub span: SourceSpan,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Parse(ParseError),
    #[error("Failed to resolve {spec:?} imported from {}: {reason}", from.display())]
    Resolve {
        spec: String,
        from: PathBuf,
        reason: String,
    },
    #[error("Render error: {0}")]
    Render(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Walks through context wrappers to the syntax error underneath, if any.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Context { source, .. } => source.as_parse_error(),
            _ => None,
        }
    }
}

/// Attach a message to the error side of a result.
pub trait Context<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|err| err.context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.context(f()))
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(format!("{err:#}"))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Generic(s.to_string())
    }
}
