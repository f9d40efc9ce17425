//! Bindings generated for the bundled `ts/` sample.

use std::path::{Path, PathBuf};

use autogen_bindgen::{map_statements, render_tokens};
use autogen_typescript::map_files;
use eyre::Result;

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn sample_index() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../ts/index.ts")
}

fn rendered_testing_ts() -> Result<String> {
    let files = map_files(&sample_index())?;
    let mapped = map_statements(&files)?;
    let (_, tokens) = mapped
        .into_iter()
        .find(|(path, _)| path.ends_with("testing.ts"))
        .expect("testing.ts should be mapped");
    Ok(render_tokens(tokens)?)
}

#[track_caller]
fn assert_has(haystack: &str, needle: &str) {
    assert!(
        squash(haystack).contains(&squash(needle)),
        "expected generated code to contain\n{needle}\n---- generated ----\n{haystack}"
    );
}

#[test]
fn index_reexports_the_sample() -> Result<()> {
    let files = map_files(&sample_index())?;
    let names = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["index.ts", "testing.ts"]);
    Ok(())
}

#[test]
fn index_without_declarations_renders_prelude_only() -> Result<()> {
    let files = map_files(&sample_index())?;
    let mapped = map_statements(&files)?;
    let (_, tokens) = mapped
        .into_iter()
        .find(|(path, _)| path.ends_with("index.ts"))
        .expect("index.ts should be mapped");
    assert_eq!(render_tokens(tokens)?, "use wasm_bindgen::prelude::*;\n");
    Ok(())
}

#[test]
fn record_class_maps_to_extern_type() -> Result<()> {
    let out = rendered_testing_ts()?;
    assert_has(&out, "use wasm_bindgen::prelude::*;");
    assert_has(&out, "#[wasm_bindgen] extern \"C\" { #[wasm_bindgen] pub type Test;");
    assert_has(
        &out,
        "#[wasm_bindgen(method, getter)] pub fn internal_num(this: &Test) -> f64;
         #[wasm_bindgen(method, setter)] pub fn set_internal_num(this: &Test, value: f64);",
    );
    assert_has(
        &out,
        "#[wasm_bindgen(method, getter)] pub fn other_num(this: &Test) -> f64;
         #[wasm_bindgen(method, setter)] pub fn set_other_num(this: &Test, value: f64);",
    );
    assert_has(&out, "#[wasm_bindgen(constructor)] pub fn new(param: f64) -> Test;");
    assert_has(
        &out,
        "#[wasm_bindgen(method, getter)] pub fn test(this: &Test) -> ::js_sys::Function;
         #[wasm_bindgen(method, setter)] pub fn set_test(this: &Test, value: &::js_sys::Function);",
    );
    Ok(())
}

#[test]
fn both_entry_points_return_the_record_type() -> Result<()> {
    let out = rendered_testing_ts()?;
    assert_has(&out, "#[wasm_bindgen] pub fn test() -> Test;");
    assert_has(&out, "#[wasm_bindgen] pub fn test2() -> Test;");
    Ok(())
}

#[test]
fn interface_and_alias_map_to_the_same_shape() -> Result<()> {
    let out = rendered_testing_ts()?;
    for owner in ["ITest", "TTest"] {
        assert_has(&out, &format!("#[wasm_bindgen] pub type {owner};"));
        assert_has(
            &out,
            &format!("#[wasm_bindgen(method, getter)] pub fn test(this: &{owner}) -> ::js_sys::Function;"),
        );
    }
    Ok(())
}

#[test]
fn enum_and_namespace_live_outside_the_extern_block() -> Result<()> {
    let out = rendered_testing_ts()?;
    assert_has(&out, "#[wasm_bindgen] pub enum ETest { Test = \"test\", }");
    assert_has(
        &out,
        "pub mod m_test {
            use super::*;
            #[wasm_bindgen]
            extern \"C\" {
                #[wasm_bindgen(js_namespace = MTest)]
                pub fn test();
            }
        }",
    );
    Ok(())
}
