//! End-to-end runs of the `typex` binary.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

fn typex(args: &[&str]) -> Output {
    let logs = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_typex"))
        .args(args)
        .env("TYPEX_LOG_DIR", logs.path())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn file_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_prints_canonical_form() {
    let output = typex(&["parse", "java.util.Map< java.lang.String,List<? extends Object>>"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Map<String, List<?>>");
}

#[test]
fn test_parse_error_exits_non_zero() {
    let output = typex(&["parse", "ArrayList<String?>"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unexpected token QUESTION in 'ArrayList<String?>'"));
}

#[test]
fn test_parse_json_then_generate() {
    let output = typex(&["parse", "--json", "List<int[]>"]);
    assert!(output.status.success());
    let json = stdout(&output);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "Parameterized");

    let file = file_with(&json);
    let output = typex(&["generate", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "List<int[]>");
}

#[test]
fn test_check_reports_failing_lines() {
    let file = file_with("# types\nList<String>\n\nArrayList>\n");
    let output = typex(&["check", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "4: Too much '>' in 'ArrayList>'");

    let file = file_with("List<String>\nMap<String, Long>\n");
    let output = typex(&["check", file.path().to_str().unwrap()]);
    assert!(output.status.success());
}

#[test]
fn test_custom_registry() {
    let registry = file_with(
        r#"{ "include_defaults": false, "classes": [{ "name": "com.acme.Widget", "alias": "W" }] }"#,
    );
    let output = typex(&[
        "parse",
        "com.acme.Widget[]",
        "--registry",
        registry.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "W[]");
}

#[test]
fn test_schema_is_json() {
    let output = typex(&["schema"]);
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(schema.is_object());
}

#[test]
fn test_descriptor_and_erase() {
    let output = typex(&["descriptor", "(I[Ljava/lang/String;)Ljava/util/List;"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(int, String[]) -> List");

    let output = typex(&["descriptor", "[[J"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "long[][]");

    let output = typex(&["erase", "Map<String, List<? extends Number>>[]"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[Ljava/util/Map;");
}

#[test]
fn test_malformed_descriptor_exits_non_zero() {
    let output = typex(&["descriptor", "Ljava/lang/String"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed field descriptor 'Ljava/lang/String'"));
}

#[test]
fn test_deep_nesting_is_an_error_not_a_crash() {
    let expr = format!("{}String{}", "List<".repeat(5000), ">".repeat(5000));
    let output = typex(&["parse", &expr]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nesting deeper than 128 levels"));
}
