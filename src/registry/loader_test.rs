use super::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn valid_registry_json() -> serde_json::Value {
    json!({
        "schemaVersion": 1,
        "generatedAt": "2025-06-01T12:00:00Z",
        "source": { "rootDir": "/repo", "componentsDir": "ui" },
        "components": [
            {
                "name": "Button",
                "dependencies": ["clsx"],
                "files": [
                    { "path": "index.vue", "content": "<template><button /></template>" }
                ]
            }
        ]
    })
}

#[test]
fn test_read_registry_file_parses_valid_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    fs::write(&path, valid_registry_json().to_string()).unwrap();

    let registry = read_registry_file(&path).unwrap();
    assert_eq!(registry.components.len(), 1);
    assert_eq!(registry.components[0].name, "Button");
    assert_eq!(registry.components[0].dependencies, vec!["clsx"]);
}

#[test]
fn test_read_registry_file_fails_for_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_registry_file(&temp_dir.path().join("registry.json")).unwrap_err();
    assert!(err.to_string().contains("registry document not found"));
}

#[test]
fn test_read_registry_file_fails_for_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.json");
    fs::write(&path, "{ not json").unwrap();

    let err = read_registry_file(&path).unwrap_err();
    assert!(err.to_string().contains("invalid registry document"));
}

#[test]
fn test_read_registry_file_rejects_unknown_schema_version() {
    let temp_dir = TempDir::new().unwrap();
    let mut doc = valid_registry_json();
    doc["schemaVersion"] = json!(2);
    let path = temp_dir.path().join("registry.json");
    fs::write(&path, doc.to_string()).unwrap();

    let err = read_registry_file(&path).unwrap_err();
    assert!(err.to_string().contains("schemaVersion"));
}

#[test]
fn test_read_registry_file_rejects_duplicate_component_names() {
    let temp_dir = TempDir::new().unwrap();
    let mut doc = valid_registry_json();
    let duplicate = doc["components"][0].clone();
    doc["components"].as_array_mut().unwrap().push(duplicate);
    let path = temp_dir.path().join("registry.json");
    fs::write(&path, doc.to_string()).unwrap();

    let err = read_registry_file(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn test_load_registry_resolves_path_identifier() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("registry.json"),
        valid_registry_json().to_string(),
    )
    .unwrap();

    let registry = load_registry(temp_dir.path(), "registry.json").unwrap();
    assert_eq!(registry.components.len(), 1);
}
