//! Borrow request commands
//!
//! Commands for tracking and creating borrow requests: list, create.

pub mod helpers;
mod mutations;
mod queries;
mod types;

use anyhow::Result;
use equip_core::{Error, RequestFormDraft, RequestsPage};

use crate::commands::{redirect_to_login, view_scope, Context};

// Re-export public types
pub use types::RequestsAction;

pub async fn execute(ctx: &Context, action: RequestsAction) -> Result<()> {
    let page = match RequestsPage::open(&ctx.api, &ctx.store, view_scope()) {
        Ok(page) => page,
        Err(Error::Unauthenticated) => {
            redirect_to_login();
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match action {
        RequestsAction::List => queries::list_requests(ctx, page).await,
        RequestsAction::Create { equipment, quantity, purpose, borrow_from, borrow_until, force } => {
            let draft = RequestFormDraft {
                equipment,
                quantity,
                purpose,
                borrow_from,
                borrow_until,
            };
            mutations::create_request(ctx, page, draft, force).await
        }
    }
}
