use std::collections::HashSet;
use std::path::{Path, PathBuf};

use autogen_core::{Context, Result};

use crate::imports::{absolutize, extract_import_references, is_local_spec, resolve_import};
use crate::parser::parse_file;

/// Absolute paths of every TypeScript file reachable from an index file.
pub type FileMapping = Vec<PathBuf>;

/// Walk imports and re-exports depth-first from `index_file`.
///
/// Each file is parsed once; cycles stop at the first revisit. The result is
/// sorted and free of duplicates.
pub fn map_files(index_file: &Path) -> Result<FileMapping> {
    let index_file = absolutize(index_file)?;
    let mut visited = HashSet::new();
    let mut mapping =
        map_file(&index_file, &mut visited).context("Failed to source map input file")?;

    mapping.sort();
    mapping.dedup();

    for file in &mapping {
        tracing::debug!("Source mapped file: {}", file.display());
    }
    tracing::debug!("Total files mapped: {}", mapping.len());

    Ok(mapping)
}

fn map_file(file: &Path, visited: &mut HashSet<PathBuf>) -> Result<FileMapping> {
    if !visited.insert(file.to_path_buf()) {
        tracing::trace!("File already source mapped, ignoring: {}", file.display());
        return Ok(Vec::new());
    }

    let module = parse_file(file)?;
    let references = extract_import_references(&module);
    tracing::trace!("Imported file: {}", file.display());
    tracing::trace!("References: {:#?}", references);

    let mut mappings = vec![file.to_path_buf()];

    for (i, reference) in references.iter().enumerate() {
        if !is_local_spec(&reference.spec) {
            tracing::debug!(
                "Skipping package import {:?} from {}",
                reference.spec,
                file.display()
            );
            continue;
        }

        let file_path = resolve_import(file, &reference.spec)?;
        tracing::trace!(
            "Reference {} ({:?}) -> {}",
            i,
            reference.kind,
            file_path.display()
        );

        let mut mapping = map_file(&file_path, visited)
            .with_context(|| format!("Error source mapping file: {}", file_path.display()))?;
        mappings.append(&mut mapping);
    }

    Ok(mappings)
}
