//! Shared building blocks for autogen: the error type used across the
//! workspace and the native model of the TypeScript sample.

pub mod error;
pub mod fixture;
mod macros;

pub use error::{Context, Error, ParseError, Result};
