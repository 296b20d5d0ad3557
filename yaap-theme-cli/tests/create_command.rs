//! Integration tests for the create command

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use yaap_theme::scaffold::WriteOutcome;
use yaap_theme_cli_lib::{CreateCommand, CreateOutcome};

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
    "private": true,
    "scripts": {"dev": "vite"},
    "dependencies": {"vite": "^4.0", "axios": "^1.6"},
    "devDependencies": {}
}"#,
    )
    .unwrap();
    dir
}

fn create(root: &Path, name: &str, force: bool) -> CreateOutcome {
    CreateCommand::new(Some(name.to_string()), root.to_path_buf())
        .force(force)
        .description(Some("Docs theme".to_string()))
        .author(Some("Jo".to_string()))
        .execute()
        .unwrap()
}

#[test]
fn test_create_generates_theme_and_updates_manifest() {
    let dir = project();

    let CreateOutcome::Created(files) = create(dir.path(), "docs", false) else {
        panic!("theme was not created");
    };
    assert_eq!(files.len(), 17);

    let theme_json = fs::read_to_string(dir.path().join("themes/docs/theme.json")).unwrap();
    let metadata: serde_json::Value = serde_json::from_str(&theme_json).unwrap();
    assert_eq!(metadata["name"], "docs");
    assert_eq!(metadata["description"], "Docs theme");
    assert_eq!(metadata["author"], "Jo");

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["dependencies"], serde_json::json!({"axios": "^1.6"}));
    assert_eq!(manifest["devDependencies"]["vite"], "^5.4");
    assert_eq!(manifest["scripts"]["dev"], "vite");
}

#[test]
fn test_existing_theme_requires_force() {
    let dir = project();
    create(dir.path(), "docs", false);
    let hello = dir.path().join("themes/docs/views/hello.blade.php");
    fs::write(&hello, "customized").unwrap();

    assert_eq!(create(dir.path(), "docs", false), CreateOutcome::Aborted);
    assert_eq!(fs::read_to_string(&hello).unwrap(), "customized");

    let CreateOutcome::Created(files) = create(dir.path(), "docs", true) else {
        panic!("forced run was not created");
    };
    assert!(files.iter().all(|f| f.outcome == WriteOutcome::Written));
    assert!(fs::read_to_string(&hello).unwrap().contains("Hello from docs"));
}

#[test]
fn test_missing_manifest_fails_after_validation() {
    let dir = TempDir::new().unwrap();
    let result = CreateCommand::new(Some("docs".to_string()), dir.path().to_path_buf()).execute();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("package.json"));
}

#[test]
fn test_config_file_changes_layout() {
    let dir = project();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::write(
        dir.path().join("config/theme.toml"),
        "themes_dir = \"resources/themes\"\n\n[container_dir]\nview = \"pages\"\n",
    )
    .unwrap();

    create(dir.path(), "docs", false);

    assert!(dir.path().join("resources/themes/docs/pages/hello.blade.php").is_file());
    assert!(dir
        .path()
        .join("resources/themes/docs/views/layouts/master.blade.php")
        .is_file());
}

#[test]
fn test_templates_dir_override_reads_from_disk() {
    let dir = project();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::write(dir.path().join("config/theme.toml"), "templates_dir = \"stubs/theme\"\n").unwrap();

    let err = CreateCommand::new(Some("docs".to_string()), dir.path().to_path_buf())
        .execute()
        .unwrap_err();
    assert!(format!("{err:#}").contains("stubs/theme/common/config/config.php"));
    assert!(!dir.path().join("themes/docs/config.php").exists());
}
