use super::*;
use std::fs;
use tempfile::TempDir;

// =========================================================================
// PackageManager::detect tests
// =========================================================================

#[test]
fn test_detect_pnpm_from_lockfile() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("pnpm-lock.yaml"), "").unwrap();
    assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Pnpm);
}

#[test]
fn test_detect_yarn_from_lockfile() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("yarn.lock"), "").unwrap();
    assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Yarn);
}

#[test]
fn test_detect_npm_from_lockfile() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package-lock.json"), "{}").unwrap();
    assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Npm);
}

#[test]
fn test_detect_bun_from_lockfile() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bun.lockb"), "").unwrap();
    assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Bun);
}

#[test]
fn test_detect_defaults_to_pnpm() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Pnpm);
}

// =========================================================================
// read_package_manifest tests
// =========================================================================

#[test]
fn test_read_manifest_parses_dependency_sections() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{
            "name": "demo",
            "dependencies": { "clsx": "^2.0.0" },
            "devDependencies": { "typescript": "^5.0.0" }
        }"#,
    )
    .unwrap();

    let manifest = read_package_manifest(temp_dir.path()).unwrap();
    assert!(manifest.declares("clsx"));
    assert!(manifest.declares("typescript"));
    assert!(!manifest.declares("chalk"));
}

#[test]
fn test_read_manifest_fails_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_package_manifest(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("package.json not found"));
}

#[test]
fn test_read_manifest_tolerates_absent_sections() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json"), r#"{ "name": "demo" }"#).unwrap();

    let manifest = read_package_manifest(temp_dir.path()).unwrap();
    assert!(!manifest.declares("clsx"));
}

// =========================================================================
// missing_dependencies tests
// =========================================================================

#[test]
fn test_missing_dependencies_filters_declared_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{ "dependencies": { "clsx": "1.0.0" } }"#,
    )
    .unwrap();
    let manifest = read_package_manifest(temp_dir.path()).unwrap();

    let candidates = vec!["clsx".to_string(), "chalk".to_string()];
    assert_eq!(missing_dependencies(&manifest, &candidates), vec!["chalk"]);
}

#[test]
fn test_missing_dependencies_checks_dev_dependencies_too() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("package.json"),
        r#"{ "devDependencies": { "typescript": "5.0.0" } }"#,
    )
    .unwrap();
    let manifest = read_package_manifest(temp_dir.path()).unwrap();

    let candidates = vec!["typescript".to_string(), "chalk".to_string()];
    assert_eq!(missing_dependencies(&manifest, &candidates), vec!["chalk"]);
}

#[test]
fn test_missing_dependencies_preserves_input_order() {
    let manifest = PackageManifest::default();
    let candidates = vec!["zod".to_string(), "axios".to_string(), "clsx".to_string()];
    assert_eq!(
        missing_dependencies(&manifest, &candidates),
        vec!["zod", "axios", "clsx"]
    );
}

#[test]
fn test_missing_dependencies_returns_empty_for_empty_candidates() {
    let manifest = PackageManifest::default();
    assert!(missing_dependencies(&manifest, &[]).is_empty());
}

// =========================================================================
// install_args tests
// =========================================================================

#[test]
fn test_install_args_uses_add_for_pnpm_yarn_bun() {
    let deps = vec!["clsx".to_string()];
    assert_eq!(
        install_args(PackageManager::Pnpm, &deps, false),
        vec!["add", "clsx"]
    );
    assert_eq!(
        install_args(PackageManager::Yarn, &deps, false),
        vec!["add", "clsx"]
    );
    assert_eq!(
        install_args(PackageManager::Bun, &deps, false),
        vec!["add", "clsx"]
    );
}

#[test]
fn test_install_args_uses_install_for_npm() {
    let deps = vec!["clsx".to_string()];
    assert_eq!(
        install_args(PackageManager::Npm, &deps, false),
        vec!["install", "clsx"]
    );
}

#[test]
fn test_install_args_dev_flag_per_package_manager() {
    let deps = vec!["typescript".to_string()];
    assert_eq!(
        install_args(PackageManager::Npm, &deps, true),
        vec!["install", "--save-dev", "typescript"]
    );
    assert_eq!(
        install_args(PackageManager::Pnpm, &deps, true),
        vec!["add", "-D", "typescript"]
    );
}

#[tokio::test]
async fn test_install_dependencies_skips_subprocess_for_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    // 依存リストが空ならサブプロセスを起動せず成功する
    install_dependencies(temp_dir.path(), PackageManager::Pnpm, &[])
        .await
        .unwrap();
}
