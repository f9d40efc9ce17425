use std::path::PathBuf;

use autogen_core::{Context, Result};
use autogen_typescript::{parse_file, FileMapping};
use proc_macro2::TokenStream;

use crate::mapper::BindingMapper;
use crate::types::TypeRegistry;

/// Source file paired with the tokens generated for it.
pub type MappedStatements = Vec<(PathBuf, TokenStream)>;

/// Parse every mapped file and generate one token stream per file.
///
/// Types declared in any of the files are visible to all of them.
pub fn map_statements(files: &FileMapping) -> Result<MappedStatements> {
    let modules = files
        .iter()
        .map(|file| {
            parse_file(file)
                .with_context(|| format!("Failed to parse {}", file.display()))
                .map(|module| (file, module))
        })
        .collect::<Result<Vec<_>>>()?;

    let registry = TypeRegistry::from_modules(modules.iter().map(|(_, module)| module));
    tracing::debug!("Registered {} declared types", registry.len());
    let mapper = BindingMapper::new(&registry);

    let mut mapped = Vec::with_capacity(modules.len());
    for (file, module) in &modules {
        tracing::debug!(
            "Mapping {} items from file: {}",
            module.body.len(),
            file.display()
        );
        let bindings = mapper
            .map_module(module)
            .with_context(|| format!("Failed to map statements of {}", file.display()))?;
        tracing::trace!(
            "{} imports and {} items from {}",
            bindings.imports.len(),
            bindings.items.len(),
            file.display()
        );
        mapped.push(((*file).clone(), bindings.file_tokens()));
    }

    Ok(mapped)
}
