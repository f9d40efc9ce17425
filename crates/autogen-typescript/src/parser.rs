use std::fs;
use std::path::{Path, PathBuf};

use autogen_core::{Error, ParseError, Result};
use swc_common::{sync::Lrc, FileName, SourceFile, SourceMap, Spanned};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::error::Error as SwcError;
use swc_ecma_parser::lexer::Lexer;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsConfig};

const ANONYMOUS_FILE: &str = "<typescript>";

/// Read and parse a TypeScript module from disk.
pub fn parse_file(path: &Path) -> Result<Module> {
    let source = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    parse_source(&source, Some(path))
}

/// Parse a TypeScript module. `.tsx` paths enable JSX syntax.
///
/// Recoverable errors are treated the same as fatal ones: the first error
/// reported by swc aborts the parse.
pub fn parse_source(source: &str, path: Option<&Path>) -> Result<Module> {
    let tsx = path
        .and_then(|p| p.extension().and_then(|ext| ext.to_str()))
        .map(|ext| ext.eq_ignore_ascii_case("tsx"))
        .unwrap_or(false);

    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(file_name(path), source.to_string());
    let syntax = Syntax::Typescript(TsConfig {
        tsx,
        decorators: true,
        ..Default::default()
    });
    let lexer = Lexer::new(syntax, EsVersion::EsNext, StringInput::from(&*fm), None);
    let mut parser = Parser::new_from(lexer);

    let module = parser.parse_typescript_module();
    let recovered = parser.take_errors();

    match module {
        Ok(module) => match recovered.into_iter().next() {
            Some(err) => Err(to_parse_error(err, &fm, path).into()),
            None => Ok(module),
        },
        Err(err) => Err(to_parse_error(err, &fm, path).into()),
    }
}

fn file_name(path: Option<&Path>) -> FileName {
    match path {
        Some(path) => FileName::Real(path.to_path_buf()),
        None => FileName::Custom(ANONYMOUS_FILE.into()),
    }
}

fn to_parse_error(err: SwcError, fm: &SourceFile, path: Option<&Path>) -> ParseError {
    let span = err.span();
    let offset = span.lo.0.saturating_sub(fm.start_pos.0) as usize;
    let len = span.hi.0.saturating_sub(span.lo.0) as usize;
    let message = err.kind().msg().to_string();
    tracing::debug!("Syntax error at byte {}: {}", offset, message);

    ParseError {
        path: path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(ANONYMOUS_FILE)),
        message,
        src: fm.src.to_string(),
        span: (offset, len).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_ecma_ast::{Decl, ModuleItem, Stmt};

    #[test]
    fn parses_class_declaration() {
        let module = parse_source("class A { x: number; }", None).unwrap();
        assert_eq!(module.body.len(), 1);
        assert!(matches!(
            &module.body[0],
            ModuleItem::Stmt(Stmt::Decl(Decl::Class(class))) if &*class.ident.sym == "A"
        ));
    }

    #[test]
    fn syntax_error_carries_source_and_span() {
        let source = "class A {\n  x: number\n  constructor( {\n}";
        let err = parse_source(source, Some(Path::new("broken.ts"))).unwrap_err();
        let parse = err.as_parse_error().expect("expected a parse error");
        assert_eq!(parse.path, PathBuf::from("broken.ts"));
        assert_eq!(parse.src, source);
        assert!(parse.span.offset() <= source.len());
        assert!(!parse.message.is_empty());
    }

    #[test]
    fn tsx_extension_enables_jsx() {
        let source = "const el = <div />;";
        assert!(parse_source(source, Some(Path::new("view.tsx"))).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_file(Path::new("definitely/not/here.ts")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
