use autogen_core::{Error, Result};
use proc_macro2::TokenStream;

/// Pretty-print generated tokens as a Rust source file.
pub fn render_tokens(tokens: TokenStream) -> Result<String> {
    let file: syn::File = syn::parse2(tokens)
        .map_err(|err| Error::Render(format!("Unable to parse token stream: {err}")))?;
    Ok(prettyplease::unparse(&file))
}

/// Like [`render_tokens`], with a leading comment naming the source file.
pub fn render_file(tokens: TokenStream, source: &str) -> Result<String> {
    let body = render_tokens(tokens)?;
    Ok(format!(
        "// Generated by autogen from {source}. Do not edit by hand.\n\n{body}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn renders_extern_block() {
        let tokens = quote! {
            use wasm_bindgen::prelude::*;
            #[wasm_bindgen]
            extern "C" {
                #[wasm_bindgen]
                pub type Test;
            }
        };
        let out = render_tokens(tokens).unwrap();
        assert!(out.starts_with("use wasm_bindgen::prelude::*;\n"));
        assert!(out.contains("extern \"C\" {\n    #[wasm_bindgen]\n    pub type Test;\n}"));
    }

    #[test]
    fn unparsable_tokens_are_a_render_error() {
        let err = render_tokens(quote! { pub fn () }).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn file_header_names_the_source() {
        let out = render_file(quote! { pub struct A; }, "ts/a.ts").unwrap();
        assert!(out.starts_with("// Generated by autogen from ts/a.ts. Do not edit by hand.\n\n"));
        assert!(out.ends_with("pub struct A;\n"));
    }
}
