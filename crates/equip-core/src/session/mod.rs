//! Session module - stored credential and entry-point guard

pub mod guard;
pub mod store;

pub use guard::{require_session, Destination, GuardOutcome, SessionGuard};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
