//! OSMC CLI - Command line tool for querying ocean observing platform data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "osmc-cli",
    version,
    about = "OSMC ocean observation data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: osmc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    osmc_cmd::run(cli.command).await
}
