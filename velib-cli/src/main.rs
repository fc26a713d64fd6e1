//! Velib CLI - query and watch the Velib tracker backend from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "velib-cli",
    version,
    about = "Velib bike-share tracker toolkit"
)]
struct Cli {
    /// Tracker backend origin
    #[arg(long, global = true, env = "VELIB_API_URL", default_value = velib_cmd::DEFAULT_API_URL)]
    base_url: String,

    #[command(subcommand)]
    command: velib_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using backend {}", cli.base_url);
    velib_cmd::run(&cli.base_url, cli.command).await
}
