use clap::Parser;
use finboard::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Track(args) => finboard::cli::track::run_track(args).await,
        Commands::Chat(args) => finboard::cli::chat::run_chat(args).await,
    }
}
