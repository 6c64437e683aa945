mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();
    let answers = env.write(
        "answers.json",
        r#"{"t1_replication_crisis_agreement": 4, "t2_publication_bias_severity": "NA"}"#,
    );

    let build = env.run_json(&["build"]);
    assert_eq!(build["ok"], true);
    validate("form-schema.schema.json", &build["data"]);

    let envelope = env.run_json(&[
        "submit",
        "--data",
        answers.to_str().unwrap(),
        "--dry-run",
    ]);
    assert_eq!(envelope["ok"], true);
    validate("envelope.schema.json", &envelope["data"]);

    let report = env.run_json(&["submit", "--data", answers.to_str().unwrap()]);
    assert_eq!(report["ok"], true);
    validate("submit-report.schema.json", &report["data"]);
}
