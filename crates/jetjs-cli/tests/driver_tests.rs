use super::args::{CliArgs, Command, ReportFormat};
use super::driver::{OperationReport, classify, load_program, render_report, run};
use jetjs_emitter::IntrinsicRegistry;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// a + b (jet.Int.plus), v1 + v2 (app.Vec.plus), x ?: y (unresolved)
const PROGRAM: &str = r#"{
    "nodes": [
        { "node": "simple_name", "name": "a" },
        { "node": "simple_name", "name": "b" },
        { "node": "binary", "left": 0, "operation": "plus", "right": 1 },
        { "node": "simple_name", "name": "v1" },
        { "node": "simple_name", "name": "v2" },
        { "node": "binary", "left": 3, "operation": "plus", "right": 4 },
        { "node": "simple_name", "name": "x" },
        { "node": "simple_name", "name": "y" },
        { "node": "binary", "left": 6, "operation": "elvis", "right": 7 }
    ],
    "descriptors": [
        { "name": "<root>", "kind": "namespace" },
        { "name": "jet", "kind": "namespace", "containing": 0 },
        { "name": "Int", "kind": "class", "containing": 1 },
        { "name": "plus", "kind": "function", "containing": 2 },
        { "name": "app", "kind": "namespace", "containing": 0 },
        { "name": "Vec", "kind": "class", "containing": 4 },
        { "name": "plus", "kind": "function", "containing": 5 }
    ],
    "bindings": { "operations": { "2": 3, "5": 6 } },
    "roots": [2, 5, 8]
}"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

fn args(command: Command) -> CliArgs {
    CliArgs {
        command,
        config: None,
        no_builtins: false,
        indent: None,
        format: ReportFormat::Text,
    }
}

#[test]
fn lower_prints_one_statement_per_root() {
    let dir = TempDir::new().unwrap();
    let program = write_file(dir.path(), "program.json", PROGRAM);

    let output = run(&args(Command::Lower { program })).unwrap();
    assert_eq!(
        output,
        "a + b;\nv1.plus(v2);\nx !== null && x !== void 0 ? x : y;\n"
    );
}

#[test]
fn lower_without_builtins_calls_operator_functions() {
    let dir = TempDir::new().unwrap();
    let program = write_file(dir.path(), "program.json", PROGRAM);

    let mut args = args(Command::Lower { program });
    args.no_builtins = true;
    let output = run(&args).unwrap();
    assert!(output.starts_with("a.plus(b);\n"), "{output}");
}

#[test]
fn config_rules_shadow_builtins() {
    let dir = TempDir::new().unwrap();
    let program = write_file(dir.path(), "program.json", PROGRAM);
    let config = write_file(
        dir.path(),
        "jetjs.json",
        r#"{ "intrinsics": [
            { "names": ["app", "Vec", "plus"], "intrinsic": { "kind": "library_call", "function": "vecPlus" } }
        ] }"#,
    );

    let mut args = args(Command::Lower { program });
    args.config = Some(config);
    let output = run(&args).unwrap();
    assert!(output.contains("jet.vecPlus(v1, v2);\n"), "{output}");
}

#[test]
fn classify_reports_every_operation() {
    let program = jetjs_descriptors::ResolvedProgram::from_json(PROGRAM).unwrap();
    let reports = classify(&program, &IntrinsicRegistry::builtin());
    assert_eq!(
        reports,
        vec![
            OperationReport {
                node: 2,
                operator: "+",
                function: Some("jet.Int.plus".to_string()),
                has_intrinsic: true,
                intrinsic: Some("binary_operator"),
            },
            OperationReport {
                node: 5,
                operator: "+",
                function: Some("app.Vec.plus".to_string()),
                has_intrinsic: false,
                intrinsic: None,
            },
            OperationReport {
                node: 8,
                operator: "?:",
                function: None,
                has_intrinsic: true,
                intrinsic: None,
            },
        ]
    );
}

#[test]
fn classify_text_report() {
    let dir = TempDir::new().unwrap();
    let program = write_file(dir.path(), "program.json", PROGRAM);

    let output = run(&args(Command::Classify { program })).unwrap();
    assert_eq!(
        output,
        "#2 + jet.Int.plus -> binary_operator\n\
         #5 + app.Vec.plus -> call\n\
         #8 ?: <unresolved> -> builtin operator\n"
    );
}

#[test]
fn classify_json_report() {
    let program = jetjs_descriptors::ResolvedProgram::from_json(PROGRAM).unwrap();
    let reports = classify(&program, &IntrinsicRegistry::empty());
    let json = render_report(&reports, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["function"], "jet.Int.plus");
    assert_eq!(value[0]["has_intrinsic"], false);
    assert_eq!(value[2]["has_intrinsic"], true);
    assert!(value[2]["intrinsic"].is_null());
}

#[test]
fn invalid_program_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let program = write_file(
        dir.path(),
        "dangling.json",
        r#"{ "nodes": [], "descriptors": [ { "name": "<root>", "kind": "namespace" } ], "roots": [3] }"#,
    );
    let err = load_program(&program).unwrap_err();
    assert!(format!("{err:#}").contains("dangling.json"));

    let missing = dir.path().join("missing.json");
    assert!(run(&args(Command::Lower { program: missing })).is_err());
}
