//! プロジェクト設定（components.json）
//!
//! 対象プロジェクトのルートに置かれる、プロセスをまたいで保持される唯一の
//! 状態。init が書き込み、add が読み込む。存在しない場合や欠けたフィールドは
//! 組み込みデフォルトへフォールバックする。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定ファイル名（デフォルト）
pub const DEFAULT_CONFIG_FILE: &str = "components.json";

/// 旧設定ファイル名（読み込みのみ対応）
pub const LEGACY_CONFIG_FILE: &str = "ui.config.json";

/// デフォルトのエイリアスシンボル
pub const DEFAULT_ALIAS_SYMBOL: &str = "@";

/// components.json のスキーマ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// コンポーネント書き込み先ディレクトリ
    #[serde(default = "default_components_dir")]
    pub components_dir: String,

    /// 共有ユーティリティ（cn/utils）のディレクトリ
    #[serde(default = "default_lib_dir")]
    pub lib_dir: String,

    /// composables のディレクトリ
    #[serde(default = "default_composables_dir")]
    pub composables_dir: String,

    /// registry の取得元（builtin / パッケージ名 / ファイルパス）
    #[serde(default = "default_registry")]
    pub registry: String,

    /// プロジェクトルートを指すエイリアスシンボル（例: @ や ~）
    ///
    /// 書き込むファイル中の `@/` プレフィックスの置換にのみ使用する。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_symbol: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_components_dir() -> String {
    "components".to_string()
}

fn default_lib_dir() -> String {
    "lib".to_string()
}

fn default_composables_dir() -> String {
    "composables".to_string()
}

fn default_registry() -> String {
    "builtin".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            components_dir: default_components_dir(),
            lib_dir: default_lib_dir(),
            composables_dir: default_composables_dir(),
            registry: default_registry(),
            alias_symbol: Some(DEFAULT_ALIAS_SYMBOL.to_string()),
        }
    }
}

impl CliConfig {
    /// エイリアスシンボルを取得（未設定ならデフォルトの @）
    pub fn alias_symbol_or_default(&self) -> &str {
        self.alias_symbol.as_deref().unwrap_or(DEFAULT_ALIAS_SYMBOL)
    }

    /// 設定ファイルを読み込む
    ///
    /// ファイルが存在しない場合は `Ok(None)` を返す。
    pub fn load(cwd: &Path, config_path: &str) -> Result<Option<Self>> {
        let path = cwd.join(config_path);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content)?;
        Ok(Some(config))
    }

    /// 設定ファイルを読み込む（旧ファイル名フォールバック付き）
    ///
    /// `config_path` 指定時はそのファイルのみを読む。未指定時はデフォルト名を
    /// 優先し、なければ旧ファイル名を試す。
    pub fn load_compat(cwd: &Path, config_path: Option<&str>) -> Result<Option<Self>> {
        if let Some(path) = config_path {
            return Self::load(cwd, path);
        }

        if let Some(config) = Self::load(cwd, DEFAULT_CONFIG_FILE)? {
            return Ok(Some(config));
        }
        Self::load(cwd, LEGACY_CONFIG_FILE)
    }

    /// 設定ファイルを書き込む
    ///
    /// 親ディレクトリは自動作成する。
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content + "\n")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
