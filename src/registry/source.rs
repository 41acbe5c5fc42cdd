//! registry ドキュメントの所在解決
//!
//! registry 識別子（builtin / パッケージ名 / ファイルパス）から、
//! registry.json の絶対パスを決定的に求める。
//!
//! 解決の優先順位:
//! 1. 空文字列または `builtin` -> CLI 自身のパッケージルート配下
//! 2. パス区切りを含む、または `.json` で終わる -> ファイルパス
//! 3. それ以外 -> パッケージ名として node_modules を探索

use crate::error::{CliError, ResolutionTier, Result};
use std::path::{Path, PathBuf};

/// 内蔵 registry を指す識別子
pub const BUILTIN_REGISTRY: &str = "builtin";

/// registry ドキュメントのファイル名
pub const REGISTRY_FILE: &str = "registry.json";

/// パッケージルート配下の registry ディレクトリ名
pub const REGISTRY_DIR: &str = "registry";

/// パッケージルートのマーカーファイル
const PACKAGE_MANIFEST: &str = "Cargo.toml";

const NODE_MODULES: &str = "node_modules";

/// パッケージルートを上方向に探索
///
/// `start` から親ディレクトリをたどり、パッケージマニフェストを含む最初の
/// ディレクトリを返す。見つからなければ `None`。
pub fn find_package_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(PACKAGE_MANIFEST).exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// 内蔵 registry のパスを解決
///
/// CLI はどこからでも起動されうるため、作業ディレクトリ基準では解決できない。
/// `start`（通常は実行バイナリのあるディレクトリ）からパッケージルートを
/// 探索し、その配下の registry/registry.json を返す。
pub fn resolve_builtin_registry(start: &Path) -> Result<PathBuf> {
    let root = find_package_root(start).ok_or_else(|| CliError::Resolution {
        tier: ResolutionTier::Builtin,
        registry: BUILTIN_REGISTRY.to_string(),
    })?;
    Ok(root.join(REGISTRY_DIR).join(REGISTRY_FILE))
}

/// パッケージ名から registry のパスを解決
///
/// `cwd` から親ディレクトリをたどり、各階層の
/// `node_modules/<name>/registry/registry.json` を探す。
pub fn resolve_package_registry(cwd: &Path, name: &str) -> Result<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let candidate = dir
            .join(NODE_MODULES)
            .join(name)
            .join(REGISTRY_DIR)
            .join(REGISTRY_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        current = dir.parent();
    }

    Err(CliError::Resolution {
        tier: ResolutionTier::Package,
        registry: name.to_string(),
    })
}

fn looks_like_path(registry: &str) -> bool {
    registry.contains('/') || registry.contains('\\') || registry.ends_with(".json")
}

/// registry 識別子をファイルパスへ解決
pub fn resolve_registry_path(cwd: &Path, registry: &str) -> Result<PathBuf> {
    // 0) 内蔵 registry
    if registry.is_empty() || registry == BUILTIN_REGISTRY {
        let exe = std::env::current_exe().map_err(|_| CliError::Resolution {
            tier: ResolutionTier::Builtin,
            registry: registry.to_string(),
        })?;
        let start = exe.parent().unwrap_or(Path::new("."));
        return resolve_builtin_registry(start);
    }

    // 1) パス風の識別子はファイルパスとして解決（相対なら cwd 基準）
    if looks_like_path(registry) {
        return Ok(cwd.join(registry));
    }

    // 2) パッケージ名として解決
    resolve_package_registry(cwd, registry)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
