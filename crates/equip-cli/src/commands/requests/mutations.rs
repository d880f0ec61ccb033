//! Borrow request mutation commands
//!
//! Create borrow requests through the request dialog flow.

use anyhow::{anyhow, Result};
use equip_core::services::today;
use equip_core::{RequestFormDraft, RequestsPage, SubmitOutcome};

use crate::commands::{report_session_expired, Context};
use crate::output::{print_error, print_success, print_warning};
use super::helpers::describe_issues;
use super::queries::print_requests;

pub async fn create_request(
    ctx: &Context,
    mut page: RequestsPage<'_>,
    draft: RequestFormDraft,
    force: bool,
) -> Result<()> {
    page.mount().await;
    if page.session_expired() {
        report_session_expired();
    }

    page.open_dialog();
    *page.draft_mut() = draft;

    let today = today();
    let bounds = page.bounds(today);
    let issues = page.issues(today);
    if !issues.is_empty() {
        let lines = describe_issues(&issues, &bounds);
        if issues.iter().any(|issue| issue.is_required()) {
            print_error("Request form is missing required fields:");
            for line in &lines {
                print_error(line);
            }
            page.cancel_dialog();
            return Err(anyhow!("Request not submitted"));
        }

        if !force {
            print_error("Request form is incomplete or out of bounds:");
            for line in &lines {
                print_error(line);
            }
            page.cancel_dialog();
            return Err(anyhow!("Request not submitted (use --force to send anyway)"));
        }

        print_warning("Submitting despite form bounds:");
        for line in &lines {
            print_warning(line);
        }
    }

    match page.submit().await {
        SubmitOutcome::Created => {
            print_success("Borrow request submitted.", ctx.quiet);
            print_requests(ctx, &page)
        }
        SubmitOutcome::Failed(message) => {
            print_error(&message);
            Err(anyhow!("Request not created"))
        }
        SubmitOutcome::Ignored => Err(anyhow!("A submission is already in progress")),
        SubmitOutcome::Cancelled => Err(anyhow!("Interrupted before the request completed")),
    }
}
