//! コンポーネントのインストール
//!
//! registry から選択したコンポーネントのファイルを、対象プロジェクトの
//! コンポーネントディレクトリ配下へ書き出す。既存ファイルは overwrite
//! 指定がない限りスキップするため、再実行してもカスタマイズ済みの
//! ファイルを壊さない。

use crate::config::DEFAULT_ALIAS_SYMBOL;
use crate::error::Result;
use crate::path_ext::PathExt;
use crate::registry::model::RegistryComponent;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// プロジェクトルートを指すエイリアスのマーカー
pub const ALIAS_MARKER: &str = "@/";

/// エイリアス書き換えの対象になるテキストファイル拡張子（小文字）
const TEXT_EXTENSIONS: [&str; 7] = ["ts", "tsx", "js", "jsx", "vue", "mjs", "cjs"];

/// `@/` プレフィックスを設定されたシンボルに置換
///
/// デフォルトシンボル（@）の場合は無変換。リテラル置換のため、偶然 `@/` を
/// 含む文字列（メールアドレス風の文字列など）にも一致する（既知の過剰一致）。
pub fn rewrite_alias(content: &str, alias_symbol: &str) -> String {
    if alias_symbol.is_empty() || alias_symbol == DEFAULT_ALIAS_SYMBOL {
        return content.to_string();
    }
    content.replace(ALIAS_MARKER, &format!("{}/", alias_symbol))
}

/// ディレクトリ配下のテキストファイルのエイリアスを書き換える
///
/// 対象拡張子のファイルのみを処理し、内容が変わるファイルだけを書き戻す。
/// init の雛形生成から再利用される。
pub fn rewrite_alias_in_dir(dir: &Path, alias_symbol: &str) -> Result<()> {
    if alias_symbol.is_empty() || alias_symbol == DEFAULT_ALIAS_SYMBOL || !dir.exists() {
        return Ok(());
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| std::io::Error::other(e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let ext = entry.path().extension_lowercase();
        if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        let raw = std::fs::read_to_string(entry.path())?;
        let next = rewrite_alias(&raw, alias_symbol);
        if next != raw {
            std::fs::write(entry.path(), next)?;
        }
    }

    Ok(())
}

/// 1コンポーネントのインストール結果
#[derive(Debug)]
pub struct InstallReport {
    /// インストール先のベースディレクトリ
    pub base_dir: PathBuf,
    /// 書き込んだファイル（コンポーネントルートからの相対パス）
    pub written: Vec<String>,
    /// 既存のためスキップしたファイル
    pub skipped: Vec<String>,
}

/// 1コンポーネントをインストールする
///
/// 書き込み先は `<cwd>/<components_dir>/<コンポーネント名>/<相対パス>`。
/// ファイルは宣言順に処理する。既存ファイルは overwrite 指定がない限り
/// スキップし、エラーにはしない。書き込む内容はエイリアス書き換え済み。
pub fn install_component(
    cwd: &Path,
    components_dir: &str,
    alias_symbol: &str,
    component: &RegistryComponent,
    overwrite: bool,
) -> Result<InstallReport> {
    let base_dir = cwd.join(components_dir).join(&component.name);
    std::fs::create_dir_all(&base_dir)?;

    let mut report = InstallReport {
        base_dir,
        written: Vec::new(),
        skipped: Vec::new(),
    };

    for file in &component.files {
        let mut target = report.base_dir.clone();
        for segment in file.path.split('/') {
            target.push(segment);
        }

        if !overwrite && target.exists() {
            report.skipped.push(file.path.clone());
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, rewrite_alias(&file.content, alias_symbol))?;
        report.written.push(file.path.clone());
    }

    Ok(report)
}

#[cfg(test)]
#[path = "install_test.rs"]
mod tests;
