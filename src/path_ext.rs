//! Path 拡張トレイト
//!
//! 標準ライブラリの `Path` に便利メソッドを追加する。

use std::path::Path;

/// Path の拡張トレイト
pub trait PathExt {
    /// `base` からの相対パスをスラッシュ区切り文字列で返す
    ///
    /// `base` の配下にない場合や UTF-8 変換不可の場合は `None`。
    fn slash_relative_to(&self, base: &Path) -> Option<String>;

    /// パス全体をスラッシュ区切り文字列に変換する
    fn to_slash_string(&self) -> String;

    /// 拡張子を小文字で返す（拡張子なしは空文字列）
    fn extension_lowercase(&self) -> String;
}

impl PathExt for Path {
    fn slash_relative_to(&self, base: &Path) -> Option<String> {
        let rel = self.strip_prefix(base).ok()?;
        let mut parts = Vec::new();
        for component in rel.components() {
            parts.push(component.as_os_str().to_str()?);
        }
        Some(parts.join("/"))
    }

    fn to_slash_string(&self) -> String {
        self.to_string_lossy().replace('\\', "/")
    }

    fn extension_lowercase(&self) -> String {
        self.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "path_ext_test.rs"]
mod tests;
