use crate::cli::{Cli, Command};

pub mod add;
pub mod build;
pub mod init;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Build(args) => build::run(args).await,
        Command::Add(args) => add::run(args).await,
        Command::Init(args) => init::run(args).await,
    }
}
