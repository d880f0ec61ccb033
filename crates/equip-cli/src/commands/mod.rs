//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod config;
pub mod equipment;
pub mod home;
pub mod requests;
pub mod session;

use anyhow::Result;
use equip_core::{ApiClient, AppConfig, Destination, FileSessionStore, ViewScope};

use crate::output::{print_error, OutputFormat};

/// Shared context for all commands
pub struct Context {
    pub config: AppConfig,
    pub store: FileSessionStore,
    pub api: ApiClient,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    pub fn new(config: AppConfig, format: OutputFormat, quiet: bool) -> Result<Self> {
        let store = FileSessionStore::new(config.session_path.clone());
        let api = ApiClient::new(&config.api_url)?;
        Ok(Self {
            config,
            store,
            api,
            format,
            quiet,
        })
    }
}

/// Scope for one command's view; Ctrl-C disposes it
pub fn view_scope() -> ViewScope {
    let scope = ViewScope::new();
    let watcher = scope.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted, abandoning in-flight requests");
            watcher.dispose();
        }
    });
    scope
}

/// Protected views send anonymous viewers to the login page
pub fn redirect_to_login() {
    print_error(&format!(
        "Not logged in. Redirecting to {} - run `schoolequip session login --token <TOKEN> --role <ROLE>`",
        Destination::Login.path()
    ));
}

/// Shown when the server rejected the stored token
pub fn report_session_expired() {
    print_error("Your session has expired or is not authorized. Log in again with `schoolequip session login`.");
}
