//! Borrow request query commands
//!
//! Read operations for borrow requests.

use anyhow::Result;
use equip_core::services::EMPTY_LIST_MESSAGE;
use equip_core::RequestsPage;

use crate::commands::{report_session_expired, Context};
use crate::output::print_output;
use super::types::RequestRow;

pub async fn list_requests(ctx: &Context, mut page: RequestsPage<'_>) -> Result<()> {
    page.mount().await;

    if page.session_expired() {
        report_session_expired();
    }

    print_requests(ctx, &page)
}

pub fn print_requests(ctx: &Context, page: &RequestsPage<'_>) -> Result<()> {
    let rows: Vec<RequestRow> = page.cards().into_iter().map(RequestRow::from).collect();
    print_output(&rows, ctx.format, EMPTY_LIST_MESSAGE)
}
