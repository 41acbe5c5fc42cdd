//! registry ドキュメントのデータモデル

use crate::error::{CliError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 現在理解できるスキーマバージョン
pub const SCHEMA_VERSION: u32 = 1;

/// registry.json のルートドキュメント
///
/// 読み込み後は1回の CLI 実行の間イミュータブルに扱う。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: SourceInfo,
    pub components: Vec<RegistryComponent>,
}

/// 生成元の情報（リポジトリ相対パス）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub root_dir: String,
    pub components_dir: String,
}

/// インストール可能な1コンポーネント
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryComponent {
    /// コンポーネント名（ソースのサブディレクトリ名 = インストール先のサブディレクトリ名）
    pub name: String,
    /// 必要な外部パッケージ名（ソート・重複なし）
    pub dependencies: Vec<String>,
    /// ファイル一覧（コンポーネントルートからの相対パス、宣言順）
    pub files: Vec<ComponentFile>,
}

/// コンポーネント内の1ファイル
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFile {
    /// スラッシュ区切りの相対パス
    pub path: String,
    /// ファイル内容（テキスト）
    pub content: String,
}

impl Registry {
    /// 名前でコンポーネントを検索
    pub fn find_component(&self, name: &str) -> Option<&RegistryComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// 名前引きのインデックスを構築（O(1) ルックアップ用）
    pub fn component_index(&self) -> HashMap<&str, &RegistryComponent> {
        self.components
            .iter()
            .map(|c| (c.name.as_str(), c))
            .collect()
    }

    /// ドキュメントの不変条件を検証
    ///
    /// - スキーマバージョンが既知であること
    /// - コンポーネント名が一意であること
    /// - 各コンポーネントが1ファイル以上を持つこと
    /// - ファイルパスが相対かつコンポーネントディレクトリの外へ出ないこと
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(CliError::Validation(format!(
                "unsupported registry schemaVersion {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                return Err(CliError::Validation(format!(
                    "duplicate component name in registry: {}",
                    component.name
                )));
            }

            if component.files.is_empty() {
                return Err(CliError::Validation(format!(
                    "component `{}` has no files",
                    component.name
                )));
            }

            for file in &component.files {
                if file.path.starts_with('/') || file.path.split('/').any(|seg| seg == "..") {
                    return Err(CliError::Validation(format!(
                        "component `{}` has an invalid file path: {}",
                        component.name, file.path
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
