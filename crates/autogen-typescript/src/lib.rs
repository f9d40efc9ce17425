//! TypeScript frontend for autogen: parsing with swc and walking the import
//! graph rooted at an index file.

pub mod imports;
pub mod mapping;
pub mod parser;

pub use swc_ecma_ast as ast;

pub use imports::{ImportReference, ImportReferenceKind};
pub use mapping::{map_files, FileMapping};
pub use parser::{parse_file, parse_source};
