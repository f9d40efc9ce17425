use std::ffi::OsString;
use std::path::{Path, PathBuf};

use autogen_core::{Error, Result};
use path_absolutize::Absolutize;
use swc_ecma_ast::{Module, ModuleDecl, ModuleItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportReferenceKind {
    Import,
    ReExportAll,
    ReExportNamed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReference {
    pub spec: String,
    pub kind: ImportReferenceKind,
}

/// Every module another file pulls declarations from: `import` sources first,
/// then `export * from` and `export { .. } from` sources, each in source order.
pub fn extract_import_references(module: &Module) -> Vec<ImportReference> {
    let mut references = module
        .body
        .iter()
        .filter_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Some(ImportReference {
                spec: import.src.value.to_string(),
                kind: ImportReferenceKind::Import,
            }),
            ModuleItem::ModuleDecl(ModuleDecl::ExportAll(export)) => Some(ImportReference {
                spec: export.src.value.to_string(),
                kind: ImportReferenceKind::ReExportAll,
            }),
            ModuleItem::ModuleDecl(ModuleDecl::ExportNamed(named)) => {
                named.src.as_ref().map(|src| ImportReference {
                    spec: src.value.to_string(),
                    kind: ImportReferenceKind::ReExportNamed,
                })
            }
            _ => None,
        })
        .collect::<Vec<_>>();
    // stable: keeps source order within each group
    references.sort_by_key(|reference| reference.kind != ImportReferenceKind::Import);
    references
}

pub fn is_local_spec(spec: &str) -> bool {
    matches!(spec, "." | "..")
        || spec.starts_with("./")
        || spec.starts_with("../")
        || spec.starts_with('/')
}

/// Resolve a relative import to an absolute `.ts` path next to `from`.
///
/// `./a`, `./a.js` and `./a.ts` all land on `a.ts`; `.tsx`, `.d.ts` and a
/// directory `index.ts` are tried in that order when `a.ts` is absent.
pub fn resolve_import(from: &Path, spec: &str) -> Result<PathBuf> {
    let base_dir = from.parent().unwrap_or_else(|| Path::new("."));
    let target = base_dir.join(strip_query_fragment(spec).trim_end_matches('/'));

    let candidates = candidate_import_paths(&target);
    let found = candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::Resolve {
            spec: spec.to_string(),
            from: from.to_path_buf(),
            reason: format!("none of {} candidate files exist", candidates.len()),
        })?;

    absolutize(found)
}

pub fn absolutize(path: &Path) -> Result<PathBuf> {
    path.absolutize()
        .map(|path| path.to_path_buf())
        .map_err(|err| Error::io(path, err))
}

fn candidate_import_paths(target: &Path) -> Vec<PathBuf> {
    let stem = match target.extension().and_then(|ext| ext.to_str()) {
        Some(ext)
            if matches!(
                ext.to_ascii_lowercase().as_str(),
                "ts" | "tsx" | "mts" | "js" | "jsx" | "mjs"
            ) =>
        {
            target.with_extension("")
        }
        _ => target.to_path_buf(),
    };

    vec![
        append_extension(&stem, "ts"),
        append_extension(&stem, "tsx"),
        append_extension(&stem, "d.ts"),
        target.join("index.ts"),
    ]
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(".");
    raw.push(ext);
    PathBuf::from(raw)
}

fn strip_query_fragment(spec: &str) -> &str {
    spec.split(|ch| ch == '?' || ch == '#')
        .next()
        .unwrap_or(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn imports_come_before_reexports() {
        let module = parse_source(
            r#"
export * from "./all";
import { A } from "./a";
export { B } from "./b";
import type { C } from "./c";
export const x = 1;
"#,
            None,
        )
        .unwrap();

        let specs = extract_import_references(&module)
            .into_iter()
            .map(|r| (r.spec, r.kind))
            .collect::<Vec<_>>();
        assert_eq!(
            specs,
            vec![
                ("./a".to_string(), ImportReferenceKind::Import),
                ("./c".to_string(), ImportReferenceKind::Import),
                ("./all".to_string(), ImportReferenceKind::ReExportAll),
                ("./b".to_string(), ImportReferenceKind::ReExportNamed),
            ]
        );
    }

    #[test]
    fn local_specs() {
        assert!(is_local_spec("./a"));
        assert!(is_local_spec("../a"));
        assert!(is_local_spec("/abs/a"));
        assert!(is_local_spec("."));
        assert!(is_local_spec(".."));
        assert!(!is_local_spec(".hidden"));
        assert!(!is_local_spec("react"));
        assert!(!is_local_spec("@scope/pkg"));
    }

    #[test]
    fn resolves_extensionless_and_js_specs_to_ts() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/lib.ts"), "export class Lib {}").unwrap();
        fs::write(root.join("src/config.service.ts"), "export class Svc {}").unwrap();
        let from = root.join("index.ts");

        let plain = resolve_import(&from, "./src/lib").unwrap();
        let js = resolve_import(&from, "./src/lib.js").unwrap();
        let dotted = resolve_import(&from, "./src/config.service").unwrap();

        assert!(plain.ends_with("src/lib.ts"));
        assert_eq!(plain, js);
        assert!(dotted.ends_with("src/config.service.ts"));
        assert!(plain.is_absolute());
    }

    #[test]
    fn resolves_directory_index() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("models")).unwrap();
        fs::write(root.join("models/index.ts"), "").unwrap();

        let resolved = resolve_import(&root.join("index.ts"), "./models/").unwrap();
        assert!(resolved.ends_with("models/index.ts"));
    }

    #[test]
    fn bare_dot_specs_resolve_to_directory_index() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("index.ts"), "").unwrap();
        fs::write(root.join("nested/index.ts"), "").unwrap();

        let parent = resolve_import(&root.join("nested/leaf.ts"), "..").unwrap();
        let current = resolve_import(&root.join("nested/leaf.ts"), ".").unwrap();
        assert_eq!(parent, absolutize(&root.join("index.ts")).unwrap());
        assert_eq!(current, absolutize(&root.join("nested/index.ts")).unwrap());
    }

    #[test]
    fn unresolvable_import_is_an_error() {
        let tmp = tempdir().unwrap();
        let err = resolve_import(&tmp.path().join("index.ts"), "./missing").unwrap_err();
        assert!(matches!(err, Error::Resolve { ref spec, .. } if spec == "./missing"));
    }
}
