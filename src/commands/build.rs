//! rui build コマンド
//!
//! コンポーネントソースのディレクトリをスキャンし、registry.json と
//! コンポーネント別デバッグ JSON を生成する。配布側のメンテナが実行する。

use crate::registry::builder::{build_registry, find_workspace_root, write_registry};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Repository root (walks up to the nearest pnpm-workspace.yaml if not specified)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Component source directory (relative to root)
    #[arg(long, default_value = "components/content/ui")]
    pub source: String,

    /// Output path for registry.json (relative to root)
    #[arg(long, default_value = "registry/registry.json")]
    pub out: String,

    /// Additional output paths (repeatable)
    #[arg(long = "also-out")]
    pub also_out: Vec<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let cwd = env::current_dir().map_err(|e| e.to_string())?;
    let root_dir = match &args.root {
        Some(root) => cwd.join(root),
        None => find_workspace_root(&cwd),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Scanning components...")
            .unwrap(),
    );

    // ドキュメント全体を組み立ててから書き出す（部分出力を残さない）
    let registry = build_registry(&root_dir, &args.source).map_err(|e| e.to_string())?;
    spinner.finish_and_clear();

    let out_path = root_dir.join(&args.out);
    write_registry(&registry, &out_path).map_err(|e| e.to_string())?;
    for extra in &args.also_out {
        write_registry(&registry, &root_dir.join(extra)).map_err(|e| e.to_string())?;
    }

    println!(
        "{} registry written: {} ({} component(s))",
        "✓".green(),
        out_path.display(),
        registry.components.len()
    );

    Ok(())
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
