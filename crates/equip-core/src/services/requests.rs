//! Borrow request repository client
//!
//! Reads the caller's own requests and submits new ones. Submission does not
//! re-check form bounds; the server is the authority on what it accepts.

use crate::api::LendingApi;
use crate::error::{Error, Result};
use crate::models::{BorrowRequest, CreateBorrowRequest, RequestFormDraft, Session};

/// Request operations for the signed-in viewer
pub struct RequestRepository<'a> {
    api: &'a dyn LendingApi,
    session: &'a Session,
}

impl<'a> RequestRepository<'a> {
    pub fn new(api: &'a dyn LendingApi, session: &'a Session) -> Self {
        Self { api, session }
    }

    /// Authenticated read of the caller's own requests
    pub async fn fetch_mine(&self) -> Result<Vec<BorrowRequest>> {
        let requests = self.api.list_my_requests(&self.session.token).await?;
        log::debug!("[requests] Fetched {} requests", requests.len());
        Ok(requests)
    }

    /// Create a borrow request from the draft
    pub async fn submit(&self, draft: &RequestFormDraft) -> Result<()> {
        let body = to_create_body(draft)?;
        log::info!(
            "[requests] Submitting request for equipment {} (qty {})",
            body.equipment,
            body.quantity
        );
        self.api.create_request(&self.session.token, &body).await
    }
}

/// Build the POST body: the equipment id becomes an integer, every other
/// field is passed through as entered.
pub fn to_create_body(draft: &RequestFormDraft) -> Result<CreateBorrowRequest> {
    let raw = draft.equipment.trim();
    if raw.is_empty() {
        return Err(Error::validation("Select equipment"));
    }

    let equipment = raw
        .parse::<i64>()
        .map_err(|_| Error::validation(format!("Invalid equipment id: {}", raw)))?;

    Ok(CreateBorrowRequest {
        equipment,
        quantity: draft.quantity,
        purpose: draft.purpose.clone(),
        borrow_from: draft.borrow_from.clone(),
        borrow_until: draft.borrow_until.clone(),
    })
}
