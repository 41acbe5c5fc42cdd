//! import 指定子スキャン
//!
//! ソーステキストから import/require の指定子を抽出し、外部パッケージ名へ
//! 正規化する。正規表現ベースの字句的ヒューリスティックであり、AST は使わない。
//! そのため import 風の文字列リテラルやコメントにも一致しうる（既知の制限）。

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// 抽出対象の import 形式（static import-from / dynamic import / require）
const IMPORT_PATTERN: &str = r#"\bfrom\s+["']([^"']+)["']|\bimport\(\s*["']([^"']+)["']\s*\)|\brequire\(\s*["']([^"']+)["']\s*\)"#;

/// ホストプロジェクトに常に存在するため、インストール対象にしない仮想モジュール
const FRAMEWORK_VIRTUAL_MODULES: [&str; 2] = ["nuxt", "vue"];

fn import_regex() -> &'static Regex {
    static IMPORT_RE: OnceLock<Regex> = OnceLock::new();
    IMPORT_RE.get_or_init(|| Regex::new(IMPORT_PATTERN).expect("import pattern is valid"))
}

/// import 指定子をパッケージ名へ正規化
///
/// インストール対象にならない指定子（相対・絶対・エイリアス・仮想モジュール）は
/// `None` を返す。
///
/// 正規化ルール:
/// - `@scope/name[/...]` -> `@scope/name`
/// - `name[/...]` -> `name`
///
/// パッケージマネージャが依存関係をキーにする形式と一致するため、
/// 戻り値はそのまま manifest のキーとして使える。
pub fn normalize_package_name(specifier: &str) -> Option<String> {
    if specifier.is_empty()
        || specifier.starts_with('.')
        || specifier.starts_with('/')
        || specifier.starts_with("@/")
        || specifier.starts_with("~/")
        || specifier.starts_with('#')
        || specifier.starts_with("virtual:")
    {
        return None;
    }

    // scoped package: @scope/name[/...] -> @scope/name
    if specifier.starts_with('@') {
        let mut parts = specifier.splitn(3, '/');
        return match (parts.next(), parts.next()) {
            (Some(scope), Some(name)) => Some(format!("{}/{}", scope, name)),
            _ => Some(specifier.to_string()),
        };
    }

    // 通常パッケージ: name[/...] -> name
    specifier.split('/').next().map(String::from)
}

/// ソーステキストから外部パッケージ名の集合を抽出
///
/// 三種類の import 形式を走査し、正規化したパッケージ名を重複なしで集める。
/// フレームワーク同梱の仮想モジュール（nuxt / vue）は明示的に import されて
/// いても常に除外する。戻り値は昇順ソート済みで、下流の差分計算が決定的になる。
pub fn extract_package_dependencies(text: &str) -> Vec<String> {
    let mut out = BTreeSet::new();

    for caps in import_regex().captures_iter(text) {
        let spec = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3));
        let Some(spec) = spec else { continue };

        if let Some(package) = normalize_package_name(spec.as_str()) {
            out.insert(package);
        }
    }

    for name in FRAMEWORK_VIRTUAL_MODULES {
        out.remove(name);
    }

    out.into_iter().collect()
}

#[cfg(test)]
#[path = "imports_test.rs"]
mod tests;

#[cfg(test)]
#[path = "imports_proptests.rs"]
mod proptests;
