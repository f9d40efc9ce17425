//! Writing generated bindings to the output tree

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use autogen_bindgen::{render_file, MappedStatements};
use autogen_core::{Error, Result};
use path_absolutize::Absolutize;

use crate::config::GenerateConfig;

fn absolutize(path: &Path) -> Result<PathBuf> {
    path.absolutize()
        .map(|p| p.to_path_buf())
        .map_err(|e| Error::io(path, e))
}

/// Output path for every mapped file: its location relative to the index
/// file's directory, under the output directory, with an `.rs` extension.
///
/// Declaration files drop their `.d` suffix. Two sources landing on the same
/// target (`a.ts` and `a.tsx`) are an error.
pub fn output_paths(
    mapped: &MappedStatements,
    config: &GenerateConfig,
) -> Result<Vec<(PathBuf, PathBuf)>> {
    let output = absolutize(&config.output.directory)?;
    let mut root = absolutize(&config.input.index_file)?;
    root.pop();

    let mut seen: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut paths = Vec::with_capacity(mapped.len());
    for (file, _) in mapped {
        let file = absolutize(file)?;
        let relative = file.strip_prefix(&root).map_err(|_| {
            Error::Output(format!(
                "{} is outside the input directory {}",
                file.display(),
                root.display()
            ))
        })?;
        let target = rust_target(&output.join(relative));
        if let Some(previous) = seen.insert(target.clone(), file.clone()) {
            return Err(Error::Output(format!(
                "{} and {} both map to {}",
                previous.display(),
                file.display(),
                target.display()
            )));
        }
        paths.push((relative.to_path_buf(), target));
    }
    Ok(paths)
}

fn rust_target(path: &Path) -> PathBuf {
    let mut target = path.with_extension("");
    if target.extension().is_some_and(|ext| ext == "d") {
        target.set_extension("");
    }
    target.set_extension("rs");
    target
}

/// Clear the output directory and write one rendered file per mapped source.
pub fn save_statements(
    mapped: &MappedStatements,
    config: &GenerateConfig,
) -> Result<Vec<PathBuf>> {
    let output = absolutize(&config.output.directory)?;
    let input = absolutize(&config.input.index_file)?;
    if input.starts_with(&output) {
        return Err(Error::Output(format!(
            "refusing to clear {}: it contains the input {}",
            output.display(),
            input.display()
        )));
    }
    let cwd = std::env::current_dir().map_err(|e| Error::io(Path::new("."), e))?;
    if cwd.starts_with(&output) {
        return Err(Error::Output(format!(
            "refusing to clear {}: it contains the working directory {}",
            output.display(),
            cwd.display()
        )));
    }

    let targets = output_paths(mapped, config)?;
    tracing::debug!(
        "Mappings: {:#?}",
        targets.iter().map(|(_, target)| target).collect::<Vec<_>>()
    );

    if output.exists() {
        fs::remove_dir_all(&output).map_err(|e| Error::io(&output, e))?;
    }

    let mut written = Vec::with_capacity(targets.len());
    for ((relative, target), (_, tokens)) in targets.into_iter().zip(mapped) {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let rendered = render_file(tokens.clone(), &relative.display().to_string())?;
        tracing::debug!("Writing file: {}", target.display());
        tracing::trace!("Output file: {}", rendered);

        fs::write(&target, rendered).map_err(|e| Error::io(&target, e))?;
        written.push(target);
    }

    Ok(written)
}
