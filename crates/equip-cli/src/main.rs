//! SchoolEquip CLI - school equipment lending client
//!
//! A command-line interface for browsing available equipment and creating
//! and tracking borrow requests against the lending API.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "schoolequip")]
#[command(author, version, about = "School equipment lending CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Lending API base URL (or set SCHOOLEQUIP_API_URL env var)
    #[arg(long, env = "SCHOOLEQUIP_API_URL", global = true)]
    api_url: Option<String>,

    /// Override session file path (or set SCHOOLEQUIP_SESSION_PATH env var)
    #[arg(long, env = "SCHOOLEQUIP_SESSION_PATH", global = true)]
    session: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Landing view, or redirect to your dashboard when logged in
    Home,

    /// Manage the stored session (login token and role)
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },

    /// Browse available equipment
    Equipment {
        #[command(subcommand)]
        action: commands::equipment::EquipmentAction,
    },

    /// Create and track borrow requests
    Requests {
        #[command(subcommand)]
        action: commands::requests::RequestsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Flags take precedence over the environment
    if let Some(api_url) = &cli.api_url {
        std::env::set_var(equip_core::config::API_URL_ENV, api_url);
    }
    if let Some(session_path) = &cli.session {
        std::env::set_var(equip_core::config::SESSION_PATH_ENV, session_path);
    }

    let config = equip_core::AppConfig::load()?;
    let ctx = commands::Context::new(config, cli.format, cli.quiet)?;

    match cli.command {
        Commands::Home => commands::home::execute(&ctx).await,
        Commands::Session { action } => commands::session::execute(&ctx, action).await,
        Commands::Equipment { action } => commands::equipment::execute(&ctx, action).await,
        Commands::Requests { action } => commands::requests::execute(&ctx, action).await,
        Commands::Config { action } => commands::config::execute(&ctx, action).await,
    }
}
