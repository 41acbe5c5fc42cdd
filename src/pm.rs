//! パッケージマネージャ連携
//!
//! package.json の読み取り、不足依存の差分計算、インストールの
//! サブプロセス起動を提供する。サブプロセスは1回の CLI 実行につき
//! 最大1回で、失敗してもリトライしない。

use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// 対応するパッケージマネージャ
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// 実行コマンド名
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// ロックファイルからパッケージマネージャを検出
    ///
    /// 見つからない場合は pnpm をデフォルトとする。
    pub fn detect(cwd: &Path) -> Self {
        if cwd.join("pnpm-lock.yaml").exists() {
            return PackageManager::Pnpm;
        }
        if cwd.join("yarn.lock").exists() {
            return PackageManager::Yarn;
        }
        if cwd.join("package-lock.json").exists() {
            return PackageManager::Npm;
        }
        if cwd.join("bun.lockb").exists() {
            return PackageManager::Bun;
        }
        PackageManager::Pnpm
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// package.json の依存関係ビュー
///
/// 依存名の集合にしか興味がないため、他のフィールドは読み捨てる。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// 依存として宣言済みか（dependencies / devDependencies の両方を見る）
    pub fn declares(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

/// package.json を読み込む
pub fn read_package_manifest(cwd: &Path) -> Result<PackageManifest> {
    let path = cwd.join("package.json");
    let content = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::NotFound(format!("package.json not found: {}", path.display()))
        } else {
            CliError::Io(e)
        }
    })?;

    serde_json::from_str(&content)
        .map_err(|e| CliError::Validation(format!("invalid package.json {}: {}", path.display(), e)))
}

/// 未宣言の依存を抽出
///
/// 候補のうち manifest に宣言されていないものを、入力順を保って返す。
/// 純粋関数で I/O は行わない。
pub fn missing_dependencies(manifest: &PackageManifest, candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|name| !manifest.declares(name))
        .cloned()
        .collect()
}

/// インストールコマンドの引数を組み立てる
pub fn install_args(pm: PackageManager, deps: &[String], dev: bool) -> Vec<String> {
    let mut args = Vec::new();

    match pm {
        PackageManager::Npm => args.push("install".to_string()),
        PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => {
            args.push("add".to_string())
        }
    }

    if dev {
        match pm {
            PackageManager::Npm => args.push("--save-dev".to_string()),
            _ => args.push("-D".to_string()),
        }
    }

    args.extend(deps.iter().cloned());
    args
}

/// 依存をインストールする
///
/// 依存リストが空なら何もしない。サブプロセスの標準入出力はそのまま
/// 引き継ぎ、非0終了はそのままエラーとして返す。
pub async fn install_dependencies(
    cwd: &Path,
    pm: PackageManager,
    deps: &[String],
) -> Result<()> {
    if deps.is_empty() {
        return Ok(());
    }

    let args = install_args(pm, deps, false);
    let status = tokio::process::Command::new(pm.command())
        .args(&args)
        .current_dir(cwd)
        .status()
        .await?;

    if !status.success() {
        return Err(CliError::Subprocess {
            pm: pm.to_string(),
            status: status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "terminated by signal".to_string()),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "pm_test.rs"]
mod tests;
