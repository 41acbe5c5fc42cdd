use clap::{Parser, Subcommand};

use crate::commands::{add, build, init};

#[derive(Debug, Parser)]
#[command(name = "rui")]
#[command(version)]
#[command(about = "UI Component Registry CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// コンポーネントソースをスキャンして registry JSON を生成（メンテナ向け）
    Build(build::Args),

    /// プロジェクトへコンポーネントと依存パッケージを追加
    Add(add::Args),

    /// プロジェクトを初期化して components.json を書き込む
    Init(init::Args),
}
