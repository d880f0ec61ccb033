//! Services module

pub mod catalog;
pub mod page;
pub mod render;
pub mod requests;
pub mod scope;
pub mod validator;

#[cfg(test)]
pub(crate) mod mock;

pub use catalog::{find_equipment, CatalogState, EquipmentCatalog};
pub use page::{RequestsPage, SubmitOutcome, GENERIC_SUBMIT_ERROR};
pub use render::{
    capitalize, classify, format_date, BadgeTone, RequestCard, StatusBadge, EMPTY_LIST_MESSAGE,
};
pub use requests::{to_create_body, RequestRepository};
pub use scope::ViewScope;
pub use validator::{check, parse_form_date, today, FieldIssue, FormBounds, FormField};
