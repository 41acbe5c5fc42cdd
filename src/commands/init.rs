//! rui init コマンド
//!
//! components.json の書き込み/マージと、プロジェクトの雛形生成
//! （lib / composables テンプレート、CSS 変数、tailwind / nuxt 設定）を行う。

use crate::config::{CliConfig, DEFAULT_CONFIG_FILE};
use crate::install::rewrite_alias_in_dir;
use crate::pm::{self, PackageManager};
use crate::scaffold::{
    self, default_tailwind_config, patch_nuxt_config_css, patch_tailwind_content,
    tailwind_content_globs,
};
use clap::Parser;
use owo_colors::OwoColorize;
use std::env;
use std::path::{Path, PathBuf};

/// init がインストールする基本依存パッケージ
const BASE_DEPENDENCIES: [&str; 5] = [
    "clsx",
    "tailwind-merge",
    "tailwindcss",
    "postcss",
    "autoprefixer",
];

#[derive(Debug, Parser)]
pub struct Args {
    /// Target project directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Package manager (detected from lockfiles if not specified)
    #[arg(long, value_enum)]
    pub pm: Option<PackageManager>,

    /// Overwrite existing template files (lib/composables)
    #[arg(long)]
    pub overwrite: bool,

    /// Config file path (relative to cwd)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Component install directory
    #[arg(long = "components-dir")]
    pub components_dir: Option<String>,

    /// Shared library directory (cn/utils)
    #[arg(long = "lib-dir")]
    pub lib_dir: Option<String>,

    /// Composables directory
    #[arg(long = "composables-dir")]
    pub composables_dir: Option<String>,

    /// Project root alias symbol (default @)
    #[arg(long = "alias-symbol")]
    pub alias_symbol: Option<String>,

    /// Registry source (builtin, package name, or path)
    #[arg(long)]
    pub registry: Option<String>,

    /// Skip installing base dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let cwd = match &args.cwd {
        Some(path) => path.clone(),
        None => env::current_dir().map_err(|e| e.to_string())?,
    };

    // package.json のないディレクトリは対象プロジェクトではない
    let manifest = pm::read_package_manifest(&cwd).map_err(|e| e.to_string())?;

    let pm_kind = args.pm.unwrap_or_else(|| PackageManager::detect(&cwd));

    // マージ優先順位: CLI フラグ > 既存設定ファイル > デフォルト
    let mut config = CliConfig::load_compat(&cwd, None)
        .map_err(|e| e.to_string())?
        .unwrap_or_default();
    if let Some(dir) = args.components_dir {
        config.components_dir = dir;
    }
    if let Some(dir) = args.lib_dir {
        config.lib_dir = dir;
    }
    if let Some(dir) = args.composables_dir {
        config.composables_dir = dir;
    }
    if let Some(symbol) = args.alias_symbol {
        config.alias_symbol = Some(symbol);
    }
    if let Some(registry) = args.registry {
        config.registry = registry;
    }

    let config_path = cwd.join(&args.config);
    config.save(&config_path).map_err(|e| e.to_string())?;

    // 基本依存のうち不足分だけをインストール
    if !args.skip_install {
        let wanted: Vec<String> = BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect();
        let missing = pm::missing_dependencies(&manifest, &wanted);
        pm::install_dependencies(&cwd, pm_kind, &missing)
            .await
            .map_err(|e| e.to_string())?;
    }

    write_scaffold(&cwd, &config, args.overwrite).map_err(|e| e.to_string())?;

    println!(
        "{} project initialized: {} written (pm={})",
        "✓".green(),
        config_path.display(),
        pm_kind
    );

    Ok(())
}

/// 雛形一式を書き出す
fn write_scaffold(cwd: &Path, config: &CliConfig, overwrite: bool) -> crate::error::Result<()> {
    let alias_symbol = config.alias_symbol_or_default();

    // テンプレートをコピーし、エイリアスシンボルを書き換える
    let lib_dir = cwd.join(&config.lib_dir);
    let composables_dir = cwd.join(&config.composables_dir);
    scaffold::write_templates(scaffold::LIB_TEMPLATES, &lib_dir, overwrite)?;
    scaffold::write_templates(scaffold::COMPOSABLE_TEMPLATES, &composables_dir, overwrite)?;
    rewrite_alias_in_dir(&lib_dir, alias_symbol)?;
    rewrite_alias_in_dir(&composables_dir, alias_symbol)?;

    // CSS 変数ファイル（既存なら触らない）
    let css_abs = cwd.join(scaffold::CSS_FILE_PATH);
    if !css_abs.exists() {
        if let Some(parent) = css_abs.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&css_abs, scaffold::DEFAULT_CSS_VARIABLES)?;
    }

    // tailwind.config.js: 存在すれば content を補い、なければ生成する
    let globs = tailwind_content_globs(&config.components_dir, &config.composables_dir);
    let tailwind_path = cwd.join("tailwind.config.js");
    if tailwind_path.exists() {
        let raw = std::fs::read_to_string(&tailwind_path)?;
        if let Some(patched) = patch_tailwind_content(&raw, &globs) {
            if patched != raw {
                std::fs::write(&tailwind_path, patched)?;
            }
        }
    } else {
        std::fs::write(&tailwind_path, default_tailwind_config(&globs))?;
    }

    // nuxt.config.ts: 存在すれば CSS エントリを登録する
    let nuxt_path = cwd.join("nuxt.config.ts");
    if nuxt_path.exists() {
        let raw = std::fs::read_to_string(&nuxt_path)?;
        let css_entry = format!("~/{}", scaffold::CSS_FILE_PATH);
        if let Some(patched) = patch_nuxt_config_css(&raw, &css_entry) {
            if patched != raw {
                std::fs::write(&nuxt_path, patched)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
