//! Config commands
//!
//! Commands for inspecting CLI configuration.

use anyhow::Result;
use clap::Subcommand;
use equip_core::config::{API_URL_ENV, REDIRECT_DELAY_ENV, SESSION_PATH_ENV};
use equip_core::SessionStore;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_error, print_info, print_output};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub async fn execute(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(ctx),
        ConfigAction::Get { key } => get_config(ctx, key),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let rows = get_all_config(ctx)?;
    print_output(&rows, ctx.format, "No configuration.")?;
    Ok(())
}

fn get_config(ctx: &Context, key: String) -> Result<()> {
    let rows = get_all_config(ctx)?;

    if let Some(row) = rows.iter().find(|r| r.key.eq_ignore_ascii_case(&key)) {
        print_info(&format!("{} = {}", row.key, row.value), ctx.quiet);
    } else {
        print_error(&format!("Config key not found: {}", key));
    }

    Ok(())
}

fn get_all_config(ctx: &Context) -> Result<Vec<ConfigRow>> {
    let config = &ctx.config;

    Ok(vec![
        ConfigRow {
            key: API_URL_ENV.to_string(),
            value: config.api_url.clone(),
            source: config.api_url_source.as_str().to_string(),
        },
        ConfigRow {
            key: SESSION_PATH_ENV.to_string(),
            value: config.session_path.to_string_lossy().to_string(),
            source: config.session_path_source.as_str().to_string(),
        },
        ConfigRow {
            key: REDIRECT_DELAY_ENV.to_string(),
            value: config.redirect_delay.as_millis().to_string(),
            source: config.redirect_delay_source.as_str().to_string(),
        },
        ConfigRow {
            key: "logged_in".to_string(),
            value: ctx.store.get()?.is_some().to_string(),
            source: "session".to_string(),
        },
    ])
}
