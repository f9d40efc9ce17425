use std::fs;
use std::path::Path;

use autogen_cli::config::GenerateConfig;
use autogen_cli::generate::{generate_command, GenerateArgs};
use autogen_cli::CliError;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_config(root: &Path) -> std::path::PathBuf {
    let config = GenerateConfig {
        input: autogen_cli::config::Input {
            index_file: root.join("ts/index.ts"),
        },
        output: autogen_cli::config::Output {
            directory: root.join("output"),
        },
    };
    let path = root.join("autogen.toml");
    config.save_to_file(&path).unwrap();
    path
}

#[test]
fn generates_one_file_per_reachable_source() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(
        &root.join("ts/index.ts"),
        "export * from \"./shapes/point\";\nimport { Util } from \"./util\";\nimport * as fs from \"fs\";\n",
    );
    write(
        &root.join("ts/shapes/point.ts"),
        "export class Point {\n  constructor(public x: number, public y: number) {}\n  lengthTo(other: Point): number { return 0; }\n}\n",
    );
    write(&root.join("ts/util.ts"), "export function makeId(): string { return \"\"; }\n");
    write(&root.join("ts/unused.ts"), "export class Unused {}\n");

    let args = GenerateArgs {
        config: write_config(root),
        regenerate: false,
    };
    let mut written = generate_command(&args).unwrap();
    written.sort();

    let out = root.join("output");
    assert_eq!(
        written
            .iter()
            .map(|p| p.strip_prefix(&out).unwrap().to_path_buf())
            .collect::<Vec<_>>(),
        vec![
            Path::new("index.rs").to_path_buf(),
            Path::new("shapes/point.rs").to_path_buf(),
            Path::new("util.rs").to_path_buf(),
        ]
    );

    let point = fs::read_to_string(out.join("shapes/point.rs")).unwrap();
    assert!(point.contains("use wasm_bindgen::prelude::*;"));
    assert!(point.contains("pub type Point;"));
    assert!(point.contains("pub fn new(x: f64, y: f64) -> Point;"));
    assert!(point.contains("#[wasm_bindgen(method, js_name = lengthTo)]"));
    assert!(point.contains("pub fn length_to(this: &Point, other: &Point) -> f64;"));

    let util = fs::read_to_string(out.join("util.rs")).unwrap();
    assert!(util.contains("#[wasm_bindgen(js_name = makeId)]"));
    assert!(util.contains("pub fn make_id() -> String;"));
    assert!(!out.join("unused.rs").exists());
}

#[test]
fn missing_config_is_generated_from_the_template() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("conf/autogen.toml");
    let args = GenerateArgs {
        config: config.clone(),
        regenerate: false,
    };

    // the default index file does not exist relative to the test's working directory
    let err = generate_command(&args).unwrap_err();
    assert!(matches!(err, CliError::Core(_)));

    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        GenerateConfig::template()
    );
}

#[test]
fn regenerate_overwrites_an_existing_config() {
    let tmp = tempdir().unwrap();
    let config = write_config(tmp.path());
    let args = GenerateArgs {
        config: config.clone(),
        regenerate: true,
    };

    let loaded = autogen_cli::generate::prepare_config(&args).unwrap();

    assert_eq!(loaded, GenerateConfig::default());
    assert_eq!(fs::read_to_string(&config).unwrap(), GenerateConfig::template());
}

#[test]
fn syntax_errors_surface_as_parse_diagnostics() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(&root.join("ts/index.ts"), "export class {\n");

    let args = GenerateArgs {
        config: write_config(root),
        regenerate: false,
    };
    let err = generate_command(&args).unwrap_err();
    let parse = err.as_parse_error().expect("parse error expected");
    assert!(parse.path.ends_with("index.ts"));
    assert!(!root.join("output").exists());
}
