//! Equipment commands
//!
//! Browse the available equipment catalog.

use anyhow::Result;
use clap::Subcommand;
use equip_core::{require_session, CatalogState, Equipment, EquipmentCatalog, Error};
use serde::Serialize;
use tabled::Tabled;

use super::{redirect_to_login, report_session_expired, view_scope, Context};
use crate::output::print_output;

#[derive(Subcommand)]
pub enum EquipmentAction {
    /// List equipment that is currently available to borrow
    List,
}

/// Equipment row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct EquipmentRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Available")]
    pub available_quantity: u32,
}

impl From<&Equipment> for EquipmentRow {
    fn from(item: &Equipment) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            available_quantity: item.available_quantity,
        }
    }
}

pub async fn execute(ctx: &Context, action: EquipmentAction) -> Result<()> {
    match action {
        EquipmentAction::List => list_equipment(ctx).await,
    }
}

async fn list_equipment(ctx: &Context) -> Result<()> {
    let session = match require_session(&ctx.store) {
        Ok(session) => session,
        Err(Error::Unauthenticated) => {
            redirect_to_login();
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let scope = view_scope();
    let catalog = EquipmentCatalog::new(&ctx.api, &session);
    let mut state = CatalogState::new();
    state.apply(scope.run(catalog.fetch_available()).await);

    if state.last_error().is_some_and(Error::is_session_expired) {
        report_session_expired();
    }

    let rows: Vec<EquipmentRow> = state.items().iter().map(EquipmentRow::from).collect();
    print_output(&rows, ctx.format, "No equipment available right now.")?;

    Ok(())
}
