use clap::Parser;
use commodity_market::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run().await,
        Command::CheckSeed { path } => cli::check_seed::run(&path).await,
    }
}
