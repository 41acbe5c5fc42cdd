//! registry のビルド
//!
//! コンポーネントソースのディレクトリを走査し、registry ドキュメントを
//! 組み立てて書き出す。ライブラリのメンテナがオフラインで実行する。
//!
//! ドキュメント全体をメモリ上で組み立ててから書き込むため、読み取りに
//! 失敗した場合に部分的な registry が主出力先に残ることはない。

use crate::error::{CliError, Result};
use crate::imports::extract_package_dependencies;
use crate::path_ext::PathExt;
use crate::registry::model::{
    ComponentFile, Registry, RegistryComponent, SourceInfo, SCHEMA_VERSION,
};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 取り込み対象の拡張子（小文字）
const ALLOWED_EXTENSIONS: [&str; 7] = ["vue", "ts", "js", "json", "css", "md", "svg"];

/// 依存抽出の対象になるコード拡張子（小文字）
const CODE_EXTENSIONS: [&str; 3] = ["ts", "js", "vue"];

/// ワークスペースルートのマーカーファイル
const WORKSPACE_MARKER: &str = "pnpm-workspace.yaml";

/// 各出力先の隣に置くコンポーネント別デバッグ成果物のディレクトリ名
const COMPONENTS_OUT_DIR: &str = "components";

/// ワークスペースルートを上方向に探索
///
/// マーカーファイルが見つからない場合は `start` をそのまま返す。
pub fn find_workspace_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(WORKSPACE_MARKER).exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}

fn is_allowed_file(path: &Path) -> bool {
    let ext = path.extension_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str())
}

fn is_code_file(path: &Path) -> bool {
    let ext = path.extension_lowercase();
    CODE_EXTENSIONS.contains(&ext.as_str())
}

/// ソースディレクトリから registry ドキュメントを組み立てる
///
/// `components_dir` の直下のサブディレクトリ1つが1コンポーネントになる。
/// 決定的な出力のため、コンポーネントは名前順、ファイルはパス順に並べる。
/// 読み取れないファイルやディレクトリがあればビルド全体を中断する。
pub fn build_registry(root_dir: &Path, components_dir: &str) -> Result<Registry> {
    let source_dir = root_dir.join(components_dir);
    if !source_dir.is_dir() {
        return Err(CliError::NotFound(format!(
            "component source directory not found: {}",
            source_dir.display()
        )));
    }

    let mut component_dirs = Vec::new();
    for entry in std::fs::read_dir(&source_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            component_dirs.push(entry.path());
        }
    }
    component_dirs.sort();

    let mut components = Vec::new();
    for component_dir in &component_dirs {
        if let Some(component) = build_component(component_dir)? {
            components.push(component);
        }
    }

    Ok(Registry {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: SourceInfo {
            root_dir: root_dir.to_slash_string(),
            components_dir: components_dir.to_string(),
        },
        components,
    })
}

/// 1コンポーネントディレクトリを読み取る
///
/// 許可された拡張子のファイルが1つもない場合は `None`（エントリを作らない）。
fn build_component(component_dir: &Path) -> Result<Option<RegistryComponent>> {
    let name = component_dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CliError::Validation(format!(
                "component directory name is not valid UTF-8: {}",
                component_dir.display()
            ))
        })?
        .to_string();

    let mut files = Vec::new();
    let mut dependencies = BTreeSet::new();

    for entry in WalkDir::new(component_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        if !entry.file_type().is_file() || !is_allowed_file(entry.path()) {
            continue;
        }

        let rel_path = entry
            .path()
            .slash_relative_to(component_dir)
            .ok_or_else(|| {
                CliError::Validation(format!(
                    "file path is not valid UTF-8: {}",
                    entry.path().display()
                ))
            })?;
        let content = std::fs::read_to_string(entry.path())?;

        // 依存はコードファイルからのみ抽出する
        if is_code_file(entry.path()) {
            dependencies.extend(extract_package_dependencies(&content));
        }

        files.push(ComponentFile {
            path: rel_path,
            content,
        });
    }

    if files.is_empty() {
        return Ok(None);
    }

    Ok(Some(RegistryComponent {
        name,
        dependencies: dependencies.into_iter().collect(),
        files,
    }))
}

/// コンポーネント内容のハッシュを計算
///
/// 全ファイル内容を宣言順に連結してハッシュする。同一入力に対するバイト
/// 安定性のみを保証する変更検知用の値で、フォーマット上の意味はない。
pub fn content_hash(component: &RegistryComponent) -> String {
    let mut hasher = DefaultHasher::new();
    for file in &component.files {
        hasher.write(file.content.as_bytes());
    }
    format!("{:016x}", hasher.finish())
}

/// コンポーネント別デバッグ成果物のスキーマ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentArtifact<'a> {
    #[serde(flatten)]
    component: &'a RegistryComponent,
    file_count: usize,
    content_hash: String,
}

/// registry ドキュメントと per-component 成果物を書き出す
///
/// `out_path` に registry.json を、その隣の `components/` に
/// コンポーネント別の `<name>.json` を書く。親ディレクトリは自動作成する。
pub fn write_registry(registry: &Registry, out_path: &Path) -> Result<()> {
    write_json(out_path, registry)?;

    let components_out_dir = out_path
        .parent()
        .map(|p| p.join(COMPONENTS_OUT_DIR))
        .unwrap_or_else(|| PathBuf::from(COMPONENTS_OUT_DIR));

    for component in &registry.components {
        let artifact = ComponentArtifact {
            component,
            file_count: component.files.len(),
            content_hash: content_hash(component),
        };
        write_json(
            &components_out_dir.join(format!("{}.json", component.name)),
            &artifact,
        )?;
    }

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content + "\n")?;
    Ok(())
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
