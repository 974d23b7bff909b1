//! CLI module for Finboard
//!
//! Demo commands that drive the orchestration layer against a live analysis
//! service from the terminal.
//!
//! # Commands
//!
//! - `track` - Render the tracker demo table and run a budget analysis
//! - `chat` - Interactive session with the conversational assistant

pub mod chat;
pub mod output;
pub mod track;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Finboard - personal-finance dashboard client
#[derive(Parser, Debug)]
#[command(
    name = "finboard",
    version,
    about = "Personal-finance dashboard orchestration client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tracker demo table and run a budget analysis
    Track(TrackArgs),
    /// Chat with the financial assistant
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "finboard.toml")]
    pub config: PathBuf,

    /// Override the analysis service base URL
    #[arg(long, env = "FINBOARD_BASE_URL")]
    pub base_url: Option<String>,

    /// Monthly income for the analysis
    #[arg(long)]
    pub income: Option<f64>,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "finboard.toml")]
    pub config: PathBuf,

    /// Override the analysis service base URL
    #[arg(long, env = "FINBOARD_BASE_URL")]
    pub base_url: Option<String>,
}

/// Resolves the effective configuration for a command: file if present,
/// defaults when the file is absent, env overrides, then CLI overrides on
/// top. A file that exists but cannot be read or parsed is an error.
pub fn resolve_config(
    path: &PathBuf,
    base_url: &Option<String>,
) -> Result<crate::config::FinboardConfig, crate::config::ConfigError> {
    let mut config = match crate::config::FinboardConfig::load(Some(path)) {
        Ok(config) => config,
        Err(crate::config::ConfigError::NotFound(_)) => crate::config::FinboardConfig::default(),
        Err(e) => return Err(e),
    }
    .with_env_overrides();
    if let Some(base_url) = base_url {
        config.service.base_url = base_url.clone();
    }
    Ok(config)
}
