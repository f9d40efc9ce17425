use std::collections::HashMap;

use autogen_core::{bail, Result};
use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

const STRICT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof",
    "unsized", "virtual", "yield",
];

// Cannot be raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// A Rust identifier paired with the JavaScript name it binds to.
#[derive(Debug, Clone)]
pub struct RustName {
    pub ident: Ident,
    pub rust: String,
    pub js: String,
}

impl RustName {
    pub fn renamed(&self) -> bool {
        self.rust != self.js
    }

    /// `js_name = ..` when the Rust spelling differs from the JavaScript one.
    pub fn js_name_arg(&self) -> Option<TokenStream> {
        self.renamed().then(|| js_arg("js_name", &self.js))
    }
}

/// `key = value`, using a bare identifier when the value is one.
pub fn js_arg(key: &str, value: &str) -> TokenStream {
    let key = Ident::new(key, Span::call_site());
    if is_plain_ident(value) {
        let value = Ident::new(value, Span::call_site());
        quote! { #key = #value }
    } else {
        quote! { #key = #value }
    }
}

/// snake_case name for functions, methods, accessors and parameters.
pub fn fn_name(js: &str) -> Result<RustName> {
    named(js, sanitize(&js.to_snake_case()))
}

/// Type names keep their JavaScript spelling.
pub fn type_name(js: &str) -> Result<RustName> {
    named(js, sanitize(js))
}

pub fn variant_name(js: &str) -> Result<RustName> {
    named(js, sanitize(&js.to_upper_camel_case()))
}

fn named(js: &str, rust: String) -> Result<RustName> {
    if rust.is_empty() || rust.chars().all(|c| c == '_') {
        bail!("cannot derive a Rust identifier from {:?}", js);
    }
    let ident = make_ident(&rust);
    Ok(RustName {
        ident,
        rust,
        js: js.to_string(),
    })
}

fn sanitize(name: &str) -> String {
    let mut out = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>();
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if PATH_KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

fn make_ident(name: &str) -> Ident {
    if STRICT_KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

fn is_plain_ident(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !STRICT_KEYWORDS.contains(&name)
        && !PATH_KEYWORDS.contains(&name)
}

/// Hands out unique Rust names within one scope; repeats get `_2`, `_3`, ...
#[derive(Debug, Default)]
pub struct Namer {
    seen: HashMap<String, usize>,
}

impl Namer {
    pub fn unique(&mut self, mut name: RustName) -> RustName {
        let count = self.seen.entry(name.rust.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            name.rust = format!("{}_{}", name.rust, count);
            name.ident = make_ident(&name.rust);
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn functions_become_snake_case() {
        let name = fn_name("getHTMLElement").unwrap();
        assert_eq!(name.rust, "get_html_element");
        assert!(name.renamed());
        assert_eq!(
            name.js_name_arg().unwrap().to_string(),
            "js_name = getHTMLElement"
        );

        let same = fn_name("internal_num").unwrap();
        assert!(!same.renamed());
        assert!(same.js_name_arg().is_none());
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(fn_name("type").unwrap().ident.to_string(), "r#type");
        assert_eq!(fn_name("self").unwrap().rust, "self_");
        assert_eq!(type_name("Self").unwrap().rust, "Self_");
    }

    #[test]
    fn odd_characters_are_replaced() {
        let name = type_name("$Store").unwrap();
        assert_eq!(name.rust, "_Store");
        assert_eq!(name.js_name_arg().unwrap().to_string(), "js_name = \"$Store\"");
        assert_eq!(fn_name("data-id").unwrap().rust, "data_id");
        assert_eq!(variant_name("2d").unwrap().rust, "_2d");
        assert!(fn_name("$").is_err());
    }

    #[test]
    fn variants_become_upper_camel_case() {
        assert_eq!(variant_name("test").unwrap().rust, "Test");
        assert_eq!(variant_name("SOME_VALUE").unwrap().rust, "SomeValue");
    }

    #[test]
    fn namer_suffixes_repeats() {
        let mut namer = Namer::default();
        assert_eq!(namer.unique(fn_name("f").unwrap()).rust, "f");
        assert_eq!(namer.unique(fn_name("f").unwrap()).rust, "f_2");
        assert_eq!(namer.unique(fn_name("g").unwrap()).rust, "g");
        let third = namer.unique(fn_name("f").unwrap());
        assert_eq!(third.rust, "f_3");
        assert_eq!(third.js, "f");
    }
}
