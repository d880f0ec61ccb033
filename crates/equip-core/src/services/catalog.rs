//! Equipment catalog reader
//!
//! Fetches the currently available equipment used to populate the request
//! form and its quantity limits.

use crate::api::LendingApi;
use crate::error::{Error, Result};
use crate::models::{Equipment, Session};

/// Reads the available-equipment list for the signed-in viewer
pub struct EquipmentCatalog<'a> {
    api: &'a dyn LendingApi,
    session: &'a Session,
}

impl<'a> EquipmentCatalog<'a> {
    pub fn new(api: &'a dyn LendingApi, session: &'a Session) -> Self {
        Self { api, session }
    }

    /// One authenticated read of items with positive availability
    pub async fn fetch_available(&self) -> Result<Vec<Equipment>> {
        let items = self.api.list_available_equipment(&self.session.token).await?;
        log::debug!("[catalog] Fetched {} available items", items.len());
        Ok(items)
    }
}

/// Last known catalog snapshot held by a view
#[derive(Debug, Default)]
pub struct CatalogState {
    items: Vec<Equipment>,
    last_error: Option<Error>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a fetch result. Failures keep the prior list and are only logged.
    pub fn apply(&mut self, result: Result<Vec<Equipment>>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.last_error = None;
            }
            Err(Error::Cancelled) => {}
            Err(e) => {
                log::warn!("[catalog] Failed to fetch equipment: {}", e);
                self.last_error = Some(e);
            }
        }
    }

    pub fn items(&self) -> &[Equipment] {
        &self.items
    }

    /// Error from the most recent failed fetch, if it has not been superseded
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Look up an item by its id as the form holds it (a string)
    pub fn find(&self, id: &str) -> Option<&Equipment> {
        find_equipment(&self.items, id)
    }
}

/// Match equipment by stringified id
pub fn find_equipment<'e>(items: &'e [Equipment], id: &str) -> Option<&'e Equipment> {
    if id.is_empty() {
        return None;
    }
    items.iter().find(|e| e.id.to_string() == id)
}
