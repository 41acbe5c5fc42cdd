use super::*;
use proptest::prelude::*;

/// パッケージ名に使える文字列（英数字とハイフン）
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}".prop_map(|s| s)
}

proptest! {
    /// スコープ付き指定子はサブパスの深さに関係なく @scope/name に収束する
    #[test]
    fn prop_scoped_specifier_collapses_to_scope_and_name(
        scope in valid_name_strategy(),
        name in valid_name_strategy(),
        sub in valid_name_strategy()
    ) {
        let specifier = format!("@{}/{}/{}", scope, name, sub);
        let expected = format!("@{}/{}", scope, name);
        prop_assert_eq!(normalize_package_name(&specifier), Some(expected));
    }

    /// スコープなし指定子は先頭セグメントに収束する
    #[test]
    fn prop_unscoped_specifier_collapses_to_first_segment(
        name in valid_name_strategy(),
        sub in valid_name_strategy()
    ) {
        let specifier = format!("{}/{}", name, sub);
        prop_assert_eq!(normalize_package_name(&specifier), Some(name));
    }

    /// 相対指定子は常に None
    #[test]
    fn prop_relative_specifier_is_never_a_package(rest in "[a-zA-Z0-9./-]{0,20}") {
        let dot = format!("./{}", rest);
        let dotdot = format!("../{}", rest);
        prop_assert_eq!(normalize_package_name(&dot), None);
        prop_assert_eq!(normalize_package_name(&dotdot), None);
    }

    /// 任意のテキストに対して出力はソート済みかつ重複なし
    #[test]
    fn prop_extract_output_is_sorted_and_unique(text in ".{0,200}") {
        let deps = extract_package_dependencies(&text);
        let mut sorted = deps.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(deps, sorted);
    }

    /// 仮想モジュールは明示的に import されていても出力に現れない
    #[test]
    fn prop_virtual_modules_never_appear(name in valid_name_strategy()) {
        let text = format!(
            "import {{ a }} from \"vue\";\nimport {{ b }} from \"nuxt\";\nimport {{ c }} from \"{}\";",
            name
        );
        let deps = extract_package_dependencies(&text);
        prop_assert!(!deps.contains(&"vue".to_string()));
        prop_assert!(!deps.contains(&"nuxt".to_string()));
    }
}
