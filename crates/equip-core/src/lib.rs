//! # equip-core
//!
//! Client-side logic for SchoolEquip, the school equipment lending system.
//!
//! This crate provides:
//! - The lending API boundary (`api` module)
//! - Stored session and entry-point guard (`session` module)
//! - Catalog, borrow request, form bounds and rendering services (`services` module)
//! - Data models (`models` module)
//! - Configuration (`config` module) and unified error handling (`error` module)

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

// Re-exports for convenience
pub use api::{ApiClient, LendingApi};
pub use config::AppConfig;
pub use error::{Error, Result};

pub use models::{
    BorrowRequest, CreateBorrowRequest, Equipment, EquipmentRef, ListEnvelope, RequestFormDraft,
    RequestStatus, Role, Session,
};

pub use services::{
    classify, format_date, BadgeTone, CatalogState, EquipmentCatalog, FieldIssue, FormBounds,
    RequestCard, RequestRepository, RequestsPage, StatusBadge, SubmitOutcome, ViewScope,
};

pub use session::{
    require_session, Destination, FileSessionStore, GuardOutcome, MemorySessionStore,
    SessionGuard, SessionStore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let v = version();
        // Should be semver format: x.y.z
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "Version should be in x.y.z format");
    }
}
