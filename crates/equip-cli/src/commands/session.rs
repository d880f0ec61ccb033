//! Session commands
//!
//! Store, inspect and clear the access token and role.

use anyhow::Result;
use clap::Subcommand;
use equip_core::{Destination, Role, Session, SessionStore};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_info, print_single, print_success};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Store an access token issued by the lending API
    Login {
        /// Access token (opaque, forwarded as a bearer token)
        #[arg(short, long)]
        token: String,

        /// Role: student, staff or admin
        #[arg(short, long, default_value = "student")]
        role: String,
    },

    /// Remove the stored session
    Logout,

    /// Show the stored session
    Show,
}

/// Session row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct SessionRow {
    #[tabled(rename = "Token")]
    pub token: String,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "Dashboard")]
    pub dashboard: String,
}

pub async fn execute(ctx: &Context, action: SessionAction) -> Result<()> {
    match action {
        SessionAction::Login { token, role } => login(ctx, token, role),
        SessionAction::Logout => logout(ctx),
        SessionAction::Show => show(ctx),
    }
}

fn login(ctx: &Context, token: String, role: String) -> Result<()> {
    let token = token.trim().to_string();
    if token.is_empty() {
        anyhow::bail!("Token must not be empty");
    }

    let role = Role::from_str(role.trim());
    ctx.store.set(&Session::new(token, role.clone()))?;

    let destination = Destination::for_role(Some(&role));
    print_success(
        &format!("Logged in as {}. Dashboard: {}", role.as_str(), destination.path()),
        ctx.quiet,
    );
    Ok(())
}

fn logout(ctx: &Context) -> Result<()> {
    ctx.store.clear()?;
    print_success(
        &format!("Logged out. Redirecting to {}", Destination::Login.path()),
        ctx.quiet,
    );
    Ok(())
}

fn show(ctx: &Context) -> Result<()> {
    match ctx.store.get()? {
        Some(session) => {
            let row = SessionRow {
                token: mask_token(&session.token),
                role: session
                    .role
                    .as_ref()
                    .map(|r| r.as_str().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                dashboard: Destination::for_role(session.role.as_ref()).path().to_string(),
            };
            print_single(&row, ctx.format)?;
        }
        None => print_info("Not logged in.", ctx.quiet),
    }
    Ok(())
}

fn mask_token(token: &str) -> String {
    if token.is_empty() {
        "-".to_string()
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("secret123"), "****");
        assert_eq!(mask_token(""), "-");
    }
}
