use super::*;
use tempfile::TempDir;

#[test]
fn test_default_config_values() {
    let config = CliConfig::default();
    assert_eq!(config.schema_version, 1);
    assert_eq!(config.components_dir, "components");
    assert_eq!(config.lib_dir, "lib");
    assert_eq!(config.composables_dir, "composables");
    assert_eq!(config.registry, "builtin");
    assert_eq!(config.alias_symbol_or_default(), "@");
}

#[test]
fn test_load_returns_none_when_file_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig::load(temp_dir.path(), DEFAULT_CONFIG_FILE).unwrap();
    assert!(config.is_none());
}

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = CliConfig::default();
    config.components_dir = "widgets".to_string();
    config.alias_symbol = Some("~".to_string());

    config
        .save(&temp_dir.path().join(DEFAULT_CONFIG_FILE))
        .unwrap();

    let loaded = CliConfig::load(temp_dir.path(), DEFAULT_CONFIG_FILE)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.components_dir, "widgets");
    assert_eq!(loaded.alias_symbol_or_default(), "~");
    assert_eq!(loaded.registry, "builtin");
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(DEFAULT_CONFIG_FILE),
        r#"{ "schemaVersion": 1, "componentsDir": "ui" }"#,
    )
    .unwrap();

    let config = CliConfig::load(temp_dir.path(), DEFAULT_CONFIG_FILE)
        .unwrap()
        .unwrap();
    assert_eq!(config.components_dir, "ui");
    assert_eq!(config.lib_dir, "lib");
    assert_eq!(config.registry, "builtin");
    // 未設定の aliasSymbol はデフォルトへフォールバック（null にはならない）
    assert_eq!(config.alias_symbol_or_default(), "@");
}

#[test]
fn test_load_compat_falls_back_to_legacy_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(LEGACY_CONFIG_FILE),
        r#"{ "schemaVersion": 1, "componentsDir": "legacy-components" }"#,
    )
    .unwrap();

    let config = CliConfig::load_compat(temp_dir.path(), None).unwrap().unwrap();
    assert_eq!(config.components_dir, "legacy-components");
}

#[test]
fn test_load_compat_prefers_default_file_over_legacy() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(DEFAULT_CONFIG_FILE),
        r#"{ "schemaVersion": 1, "componentsDir": "primary" }"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join(LEGACY_CONFIG_FILE),
        r#"{ "schemaVersion": 1, "componentsDir": "legacy" }"#,
    )
    .unwrap();

    let config = CliConfig::load_compat(temp_dir.path(), None).unwrap().unwrap();
    assert_eq!(config.components_dir, "primary");
}

#[test]
fn test_load_compat_with_explicit_path_skips_legacy_fallback() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(LEGACY_CONFIG_FILE),
        r#"{ "schemaVersion": 1 }"#,
    )
    .unwrap();

    let config = CliConfig::load_compat(temp_dir.path(), Some(DEFAULT_CONFIG_FILE)).unwrap();
    assert!(config.is_none());
}

#[test]
fn test_saved_config_uses_camel_case_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
    CliConfig::default().save(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"schemaVersion\""));
    assert!(raw.contains("\"componentsDir\""));
    assert!(raw.contains("\"composablesDir\""));
    assert!(raw.contains("\"aliasSymbol\""));
    assert!(raw.ends_with('\n'));
}
