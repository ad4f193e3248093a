use super::config::{DEFAULT_INDENT, JetJsConfig, load_config, parse_config};
use jetjs_emitter::FunctionIntrinsic;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

#[test]
fn empty_object_uses_defaults() {
    let config = parse_config("{}").expect("should parse");
    assert_eq!(config, JetJsConfig::default());
    assert_eq!(config.indent, DEFAULT_INDENT);
}

#[test]
fn parses_indent_and_rules() {
    let config = parse_config(
        r#"{
            "indent": 2,
            "intrinsics": [
                { "pattern": "String.trim", "intrinsic": { "kind": "method_call", "method": "trim" } },
                { "names": ["jet", "io", "print"], "intrinsic": { "kind": "global_call", "function": "console.log" } }
            ]
        }"#,
    )
    .expect("should parse");
    assert_eq!(config.indent, 2);
    assert_eq!(config.intrinsics.len(), 2);
    assert_eq!(
        config.intrinsics[0].intrinsic,
        FunctionIntrinsic::MethodCall {
            method: "trim".to_string()
        }
    );
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(parse_config(r#"{ "indnet": 2 }"#).is_err());
}

#[test]
fn registry_appends_rules_to_builtins() {
    let config = parse_config(
        r#"{ "intrinsics": [ { "pattern": "String.trim", "intrinsic": { "kind": "method_call", "method": "trim" } } ] }"#,
    )
    .unwrap();
    let builtin = config.intrinsic_registry(true).unwrap();
    let bare = config.intrinsic_registry(false).unwrap();
    assert_eq!(bare.len(), 1);
    assert_eq!(
        builtin.len(),
        jetjs_emitter::IntrinsicRegistry::builtin().len() + 1
    );
}

#[test]
fn invalid_rule_names_its_position() {
    let config = parse_config(
        r#"{ "intrinsics": [ { "pattern": "String..trim", "intrinsic": { "kind": "element_get" } } ] }"#,
    )
    .unwrap();
    let err = config.intrinsic_registry(false).unwrap_err();
    assert!(format!("{err:#}").contains("invalid intrinsic rule #0"));
}

#[test]
fn load_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let good = write_file(dir.path(), "jetjs.json", r#"{ "indent": 8 }"#);
    assert_eq!(load_config(&good).unwrap().indent, 8);

    let bad = write_file(dir.path(), "broken.json", "{ indent: }");
    let err = load_config(&bad).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));

    let missing = dir.path().join("missing.json");
    assert!(load_config(&missing).is_err());
}
