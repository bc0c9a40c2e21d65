//! Output contracts for the CLI surface: stable fields in JSON output and
//! guard/no-op messaging in text output.

use std::fs;

use create_ers_web::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

fn context_for(workspace: &TempDir) -> CliContext {
    CliContext::new(workspace.path().to_path_buf(), None).unwrap()
}

#[test]
fn plan_json_contract_has_required_fields() {
    let workspace = TempDir::new().unwrap();
    let cli = context_for(&workspace);

    let output = cli
        .execute(&Commands::Plan {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed.get("dirs").and_then(|v| v.as_array()).is_some());
    assert!(parsed.get("files").and_then(|v| v.as_array()).is_some());
    assert!(parsed
        .get("runtime_dependencies")
        .and_then(|v| v.as_array())
        .is_some());
    assert!(parsed
        .get("dev_dependencies")
        .and_then(|v| v.as_array())
        .is_some());

    // Planning never writes anything.
    assert_eq!(fs::read_dir(workspace.path()).unwrap().count(), 0);
}

#[test]
fn validate_json_contract_has_required_fields() {
    let workspace = TempDir::new().unwrap();
    let cli = context_for(&workspace);

    let output = cli
        .execute(&Commands::Validate {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["complete"], false);
    let missing = parsed["missing"].as_array().unwrap();
    assert!(missing.iter().any(|v| v == "package.json"));

    // Validation never writes anything.
    assert_eq!(fs::read_dir(workspace.path()).unwrap().count(), 0);
}

#[test]
fn create_skip_init_materializes_filesystem_half() {
    let workspace = TempDir::new().unwrap();
    let cli = context_for(&workspace);

    let output = cli
        .execute(&Commands::Create {
            skip_init: true,
            skip_install: true,
        })
        .unwrap();

    assert!(output.contains("created config"));
    assert!(output.contains("Toolchain init skipped."));
    assert!(workspace.path().join("src/web/pages").is_dir());
    assert!(workspace.path().join("index.ts").exists());
}

#[test]
fn create_in_scaffolded_workspace_reports_skip() {
    let workspace = TempDir::new().unwrap();
    fs::write(workspace.path().join("package.json"), "{\"name\":\"mine\"}").unwrap();
    let cli = context_for(&workspace);

    let output = cli
        .execute(&Commands::Create {
            skip_init: false,
            skip_install: false,
        })
        .unwrap();

    assert_eq!(output, "package.json already existed, skip creating");
    assert!(!workspace.path().join("config").exists());
}

#[test]
fn invalid_format_is_rejected() {
    let workspace = TempDir::new().unwrap();
    let cli = context_for(&workspace);

    let err = cli
        .execute(&Commands::Plan {
            format: "yaml".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("Invalid format"));
}
