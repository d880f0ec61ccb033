//! "My Requests" page controller
//!
//! Holds the state of the requests view: the request list, the catalog
//! snapshot, the create dialog and its draft, plus the loading, submitting
//! and error flags. Fetches run inside the page's `ViewScope`, so results
//! that arrive after `dispose` are dropped.

use chrono::NaiveDate;

use crate::api::LendingApi;
use crate::error::{Error, Result};
use crate::models::{BorrowRequest, RequestFormDraft, Session};
use crate::session::{require_session, SessionStore};

use super::catalog::{CatalogState, EquipmentCatalog};
use super::render::RequestCard;
use super::requests::RequestRepository;
use super::scope::ViewScope;
use super::validator::{check, FieldIssue, FormBounds};

/// Banner text when a create call fails without a specific message
pub const GENERIC_SUBMIT_ERROR: &str = "Request failed";

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted by the server; the dialog closed and the list was re-fetched
    Created,
    /// Rejected or unreachable; the banner holds the message
    Failed(String),
    /// Another submission is in flight or the dialog is closed
    Ignored,
    /// The page was disposed while the call was in flight
    Cancelled,
}

/// State of the requests page
pub struct RequestsPage<'a> {
    api: &'a dyn LendingApi,
    session: Session,
    scope: ViewScope,
    requests: Vec<BorrowRequest>,
    requests_error: Option<Error>,
    catalog: CatalogState,
    loading: bool,
    dialog_open: bool,
    submitting: bool,
    error: Option<String>,
    draft: RequestFormDraft,
}

impl<'a> RequestsPage<'a> {
    /// Guard the page and build its initial state.
    ///
    /// Fails with `Error::Unauthenticated` when no token is stored; the caller
    /// sends the viewer to the login destination.
    pub fn open<S>(api: &'a dyn LendingApi, store: &S, scope: ViewScope) -> Result<Self>
    where
        S: SessionStore + ?Sized,
    {
        let session = require_session(store)?;
        Ok(Self {
            api,
            session,
            scope,
            requests: Vec::new(),
            requests_error: None,
            catalog: CatalogState::new(),
            loading: true,
            dialog_open: false,
            submitting: false,
            error: None,
            draft: RequestFormDraft::default(),
        })
    }

    /// Load requests and the catalog concurrently
    pub async fn mount(&mut self) {
        let (requests, equipment) = {
            let repository = RequestRepository::new(self.api, &self.session);
            let catalog = EquipmentCatalog::new(self.api, &self.session);
            tokio::join!(
                self.scope.run(repository.fetch_mine()),
                self.scope.run(catalog.fetch_available()),
            )
        };

        self.apply_requests(requests);
        self.catalog.apply(equipment);
    }

    /// Re-query the request list
    pub async fn refresh(&mut self) {
        let result = {
            let repository = RequestRepository::new(self.api, &self.session);
            self.scope.run(repository.fetch_mine()).await
        };
        self.apply_requests(result);
    }

    fn apply_requests(&mut self, result: Result<Vec<BorrowRequest>>) {
        match result {
            Ok(requests) => {
                self.requests = requests;
                self.requests_error = None;
            }
            // Disposed view: nothing may be written
            Err(Error::Cancelled) => return,
            Err(e) => {
                log::warn!("[requests] Failed to fetch requests: {}", e);
                self.requests_error = Some(e);
            }
        }
        self.loading = false;
    }

    /// Open the create dialog with a fresh draft
    pub fn open_dialog(&mut self) {
        self.draft = RequestFormDraft::default();
        self.error = None;
        self.dialog_open = true;
    }

    /// Close the dialog and discard the draft
    pub fn cancel_dialog(&mut self) {
        self.dialog_open = false;
        self.draft = RequestFormDraft::default();
        self.error = None;
    }

    pub fn draft_mut(&mut self) -> &mut RequestFormDraft {
        &mut self.draft
    }

    /// Change the selected equipment; the quantity is kept as entered
    pub fn select_equipment(&mut self, id: impl Into<String>) {
        self.draft.equipment = id.into();
    }

    /// Widget bounds for the current draft
    pub fn bounds(&self, today: NaiveDate) -> FormBounds {
        FormBounds::for_draft(&self.draft, self.catalog.items(), today)
    }

    /// Bounds the current draft violates
    pub fn issues(&self, today: NaiveDate) -> Vec<FieldIssue> {
        check(&self.draft, &self.bounds(today))
    }

    /// Submit the draft. At most one create call is in flight at a time.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.submitting || !self.dialog_open {
            return SubmitOutcome::Ignored;
        }

        self.submitting = true;
        self.error = None;

        let result = {
            let repository = RequestRepository::new(self.api, &self.session);
            self.scope.run(repository.submit(&self.draft)).await
        };

        let outcome = match result {
            Ok(()) => {
                self.dialog_open = false;
                self.draft = RequestFormDraft::default();
                self.refresh().await;
                SubmitOutcome::Created
            }
            Err(Error::Cancelled) => SubmitOutcome::Cancelled,
            Err(e) => {
                log::warn!("[requests] Submit failed: {}", e);
                let message = banner_message(&e);
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        self.submitting = false;
        outcome
    }

    /// Abandon in-flight fetches; later results are dropped
    pub fn dispose(&self) {
        self.scope.dispose();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn requests(&self) -> &[BorrowRequest] {
        &self.requests
    }

    /// Why the last request fetch failed; `None` means the list is current
    pub fn requests_error(&self) -> Option<&Error> {
        self.requests_error.as_ref()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn cards(&self) -> Vec<RequestCard> {
        self.requests.iter().map(RequestCard::from).collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &RequestFormDraft {
        &self.draft
    }

    /// Error banner shown inside the dialog
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when either load failed because the server rejected the token
    pub fn session_expired(&self) -> bool {
        self.requests_error.as_ref().is_some_and(Error::is_session_expired)
            || self.catalog.last_error().is_some_and(Error::is_session_expired)
    }
}

fn banner_message(err: &Error) -> String {
    match err {
        Error::SubmitFailed(message) | Error::Validation(message) => message.clone(),
        _ => GENERIC_SUBMIT_ERROR.to_string(),
    }
}
