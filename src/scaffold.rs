//! プロジェクト雛形の生成
//!
//! init が書き出すテンプレート（lib / composables / CSS 変数）と、
//! tailwind.config.js / nuxt.config.ts へのテキストパッチを提供する。
//! 設定ファイルのパッチは保守的なテキスト置換であり、構文解析はしない。

use crate::error::Result;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// バイナリに埋め込むテンプレートファイル
pub struct TemplateFile {
    /// 出力先ディレクトリからの相対パス
    pub path: &'static str,
    pub content: &'static str,
}

/// lib ディレクトリのテンプレート
pub const LIB_TEMPLATES: &[TemplateFile] = &[TemplateFile {
    path: "utils.ts",
    content: include_str!("../templates/lib/utils.ts"),
}];

/// composables ディレクトリのテンプレート
pub const COMPOSABLE_TEMPLATES: &[TemplateFile] = &[TemplateFile {
    path: "use-toggle.ts",
    content: include_str!("../templates/composables/use-toggle.ts"),
}];

/// CSS 変数定義のデフォルト内容
pub const DEFAULT_CSS_VARIABLES: &str = include_str!("../templates/css/theme.css");

/// CSS 変数ファイルの書き込み先（プロジェクトルートからの相対パス）
pub const CSS_FILE_PATH: &str = "assets/css/ui-theme.css";

/// テンプレート一式を書き出す
///
/// 既存ファイルは overwrite 指定がない限りスキップする。
/// 書き込んだファイルの相対パスを返す。
pub fn write_templates(
    templates: &[TemplateFile],
    target_dir: &Path,
    overwrite: bool,
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for template in templates {
        let mut target = target_dir.to_path_buf();
        for segment in template.path.split('/') {
            target.push(segment);
        }

        if !overwrite && target.exists() {
            continue;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, template.content)?;
        written.push(template.path.to_string());
    }

    Ok(written)
}

/// tailwind の content グロブ一覧を組み立てる
pub fn tailwind_content_globs(components_dir: &str, composables_dir: &str) -> Vec<String> {
    vec![
        "./components/**/*.{vue,js,ts}".to_string(),
        "./layouts/**/*.{vue,js,ts}".to_string(),
        "./pages/**/*.{vue,js,ts}".to_string(),
        "./plugins/**/*.{js,ts}".to_string(),
        "./app.vue".to_string(),
        "./error.vue".to_string(),
        "./content/**/*.{md,yml,yaml,json}".to_string(),
        format!("./{}/**/*.{{vue,js,ts}}", components_dir),
        format!("./{}/**/*.{{js,ts}}", composables_dir),
    ]
}

/// tailwind.config.js のデフォルト内容を生成
pub fn default_tailwind_config(content_globs: &[String]) -> String {
    let globs = content_globs
        .iter()
        .map(|g| format!("    \"{}\",", g))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"/** @type {{import('tailwindcss').Config}} */
export default {{
  darkMode: ['class'],
  content: [
{globs}
  ],
  theme: {{
    extend: {{
      colors: {{
        border: 'hsl(var(--border))',
        input: 'hsl(var(--input))',
        ring: 'hsl(var(--ring))',
        background: 'hsl(var(--background))',
        foreground: 'hsl(var(--foreground))',
        primary: {{
          DEFAULT: 'hsl(var(--primary))',
          foreground: 'hsl(var(--primary-foreground))',
        }},
        secondary: {{
          DEFAULT: 'hsl(var(--secondary))',
          foreground: 'hsl(var(--secondary-foreground))',
        }},
        destructive: {{
          DEFAULT: 'hsl(var(--destructive))',
          foreground: 'hsl(var(--destructive-foreground))',
        }},
        muted: {{
          DEFAULT: 'hsl(var(--muted))',
          foreground: 'hsl(var(--muted-foreground))',
        }},
        accent: {{
          DEFAULT: 'hsl(var(--accent))',
          foreground: 'hsl(var(--accent-foreground))',
        }},
        popover: {{
          DEFAULT: 'hsl(var(--popover))',
          foreground: 'hsl(var(--popover-foreground))',
        }},
        card: {{
          DEFAULT: 'hsl(var(--card))',
          foreground: 'hsl(var(--card-foreground))',
        }},
      }},
      borderRadius: {{
        xl: 'calc(var(--radius) + 4px)',
        lg: 'var(--radius)',
        md: 'calc(var(--radius) - 2px)',
        sm: 'calc(var(--radius) - 4px)',
      }},
    }},
  }},
  plugins: [],
}};
"#
    )
}

fn tailwind_content_regex() -> &'static Regex {
    static CONTENT_RE: OnceLock<Regex> = OnceLock::new();
    CONTENT_RE.get_or_init(|| Regex::new(r"(?s)content\s*:\s*\[(.*?)\]").expect("valid pattern"))
}

/// 既存の tailwind 設定の content 配列へ不足グロブを追記
///
/// `content: [ ... ]` が見つからない場合は `None`。不足がなければ元の内容を
/// そのまま返す。挿入位置は配列の末尾。
pub fn patch_tailwind_content(existing: &str, wanted_globs: &[String]) -> Option<String> {
    let caps = tailwind_content_regex().captures(existing)?;
    let whole = caps.get(0)?;
    let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");

    let missing: Vec<&String> = wanted_globs.iter().filter(|g| !inner.contains(*g)).collect();
    if missing.is_empty() {
        return Some(existing.to_string());
    }

    let insertion = missing
        .iter()
        .map(|g| format!("    \"{}\",", g))
        .collect::<Vec<_>>()
        .join("\n");

    let patched_block = format!(
        "{}{}\n  ]",
        whole.as_str().strip_suffix(']').unwrap_or(whole.as_str()),
        insertion
    );

    let mut out = String::with_capacity(existing.len() + patched_block.len());
    out.push_str(&existing[..whole.start()]);
    out.push_str(&patched_block);
    out.push_str(&existing[whole.end()..]);
    Some(out)
}

fn nuxt_css_array_regex() -> &'static Regex {
    static CSS_RE: OnceLock<Regex> = OnceLock::new();
    CSS_RE.get_or_init(|| Regex::new(r"\bcss\s*:\s*\[").expect("valid pattern"))
}

fn nuxt_define_regex() -> &'static Regex {
    static DEFINE_RE: OnceLock<Regex> = OnceLock::new();
    DEFINE_RE.get_or_init(|| Regex::new(r"defineNuxtConfig\(\s*\{\s*").expect("valid pattern"))
}

/// nuxt.config.ts へ CSS エントリを登録
///
/// 既に登録済みならそのまま返す。`css: [` 配列があれば先頭へ挿入し、
/// なければ `defineNuxtConfig({` の直後へ `css:` キーを挿入する。
/// どちらも見つからない場合は `None`（パッチ不能）。
pub fn patch_nuxt_config_css(raw: &str, css_path: &str) -> Option<String> {
    if raw.contains(css_path) {
        return Some(raw.to_string());
    }

    if let Some(m) = nuxt_css_array_regex().find(raw) {
        let mut out = String::with_capacity(raw.len() + css_path.len() + 8);
        out.push_str(&raw[..m.start()]);
        out.push_str(&format!("css: [\"{}\", ", css_path));
        out.push_str(&raw[m.end()..]);
        return Some(out);
    }

    if let Some(m) = nuxt_define_regex().find(raw) {
        let mut out = String::with_capacity(raw.len() + css_path.len() + 16);
        out.push_str(&raw[..m.end()]);
        out.push_str(&format!("\n  css: [\"{}\"],\n", css_path));
        out.push_str(&raw[m.end()..]);
        return Some(out);
    }

    None
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
