//! registry ドキュメントの読み込み
//!
//! 解決済みパスのファイルを読み、検証済みの [`Registry`] へパースする。
//! registry は小さく実行単位で使い捨てる前提のため、キャッシュしない。

use crate::error::{CliError, Result};
use crate::registry::model::Registry;
use crate::registry::source::resolve_registry_path;
use std::path::Path;

/// registry 識別子からドキュメントを読み込む
pub fn load_registry(cwd: &Path, registry: &str) -> Result<Registry> {
    let path = resolve_registry_path(cwd, registry)?;
    read_registry_file(&path)
}

/// ファイルから registry ドキュメントを読み込む
///
/// ファイルが存在しない、JSON として不正、スキーマバージョンが未知、
/// いずれの場合も内容を特定できるエラーを返す。
pub fn read_registry_file(path: &Path) -> Result<Registry> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::NotFound(format!("registry document not found: {}", path.display()))
        } else {
            CliError::Io(e)
        }
    })?;

    let registry: Registry = serde_json::from_str(&content).map_err(|e| {
        CliError::Validation(format!(
            "invalid registry document {}: {}",
            path.display(),
            e
        ))
    })?;

    registry.validate()?;
    Ok(registry)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
