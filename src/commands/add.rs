//! rui add コマンド
//!
//! registry からコンポーネントを選択し、対象プロジェクトへファイルを
//! 書き出して不足依存をインストールする。

use crate::config::{CliConfig, DEFAULT_CONFIG_FILE};
use crate::error::CliError;
use crate::install::{install_component, InstallReport};
use crate::output::CommandSummary;
use crate::pm::{self, PackageManager};
use crate::registry::loader::load_registry;
use crate::tui;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Component names to add
    pub components: Vec<String>,

    /// Target project directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Package manager (detected from lockfiles if not specified)
    #[arg(long, value_enum)]
    pub pm: Option<PackageManager>,

    /// Skip interactive selection
    #[arg(long)]
    pub yes: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub overwrite: bool,

    /// Config file path (relative to cwd)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Override the registry source from the config
    #[arg(long)]
    pub registry: Option<String>,

    /// Override componentsDir from the config
    #[arg(long = "components-dir")]
    pub components_dir: Option<String>,

    /// Override aliasSymbol from the config (default @)
    #[arg(long = "alias-symbol")]
    pub alias_symbol: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let cwd = match &args.cwd {
        Some(path) => path.clone(),
        None => env::current_dir().map_err(|e| e.to_string())?,
    };

    let pm = args.pm.unwrap_or_else(|| PackageManager::detect(&cwd));

    // 設定を読み込み、CLI フラグで上書きする
    let mut config = CliConfig::load_compat(&cwd, Some(&args.config))
        .map_err(|e| e.to_string())?
        .unwrap_or_default();
    if let Some(registry) = args.registry {
        config.registry = registry;
    }
    if let Some(dir) = args.components_dir {
        config.components_dir = dir;
    }
    if let Some(symbol) = args.alias_symbol {
        config.alias_symbol = Some(symbol);
    }

    let registry = load_registry(&cwd, &config.registry).map_err(|e| e.to_string())?;

    let targets = if !args.components.is_empty() {
        args.components.clone()
    } else if args.yes {
        return Err(
            "no components specified; pass component names or drop --yes to select interactively"
                .to_string(),
        );
    } else {
        tui::select_components(&registry).map_err(|e| e.to_string())?
    };

    let manifest = pm::read_package_manifest(&cwd).map_err(|e| e.to_string())?;

    // 選択順にファイルを書き出し、依存集合を合算する
    let index = registry.component_index();
    let alias_symbol = config.alias_symbol_or_default().to_string();
    let mut all_deps: BTreeSet<String> = BTreeSet::new();
    let mut reports: Vec<(String, InstallReport)> = Vec::new();

    for name in &targets {
        let component = index
            .get(name.as_str())
            .copied()
            .ok_or_else(|| {
                CliError::NotFound(format!("component not found in registry: {}", name))
                    .to_string()
            })?;

        let report = install_component(
            &cwd,
            &config.components_dir,
            &alias_symbol,
            component,
            args.overwrite,
        )
        .map_err(|e| e.to_string())?;

        all_deps.extend(component.dependencies.iter().cloned());
        reports.push((name.clone(), report));
    }

    print_report_table(&reports);

    // 不足依存は1回のインストール呼び出しにまとめる
    let candidates: Vec<String> = all_deps.into_iter().collect();
    let missing = pm::missing_dependencies(&manifest, &candidates);
    pm::install_dependencies(&cwd, pm, &missing)
        .await
        .map_err(|e| e.to_string())?;

    let skipped: usize = reports.iter().map(|(_, r)| r.skipped.len()).sum();
    let summary = CommandSummary::format(reports.len(), skipped);
    println!(
        "\n{} {} ({} missing dependencies installed, pm={})",
        summary.prefix,
        summary.message,
        missing.len(),
        pm
    );

    Ok(())
}

fn print_report_table(reports: &[(String, InstallReport)]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Component", "File", "Action"]);

    for (name, report) in reports {
        for path in &report.written {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(path),
                Cell::new("Write").fg(Color::Green),
            ]);
        }
        for path in &report.skipped {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(path),
                Cell::new("Skip (exists)").fg(Color::DarkGrey),
            ]);
        }
    }

    println!("{table}");
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
