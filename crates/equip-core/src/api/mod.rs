//! Lending API boundary
//!
//! `LendingApi` abstracts the remote REST server for testability; `ApiClient`
//! is the HTTP implementation.

pub mod client;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{BorrowRequest, CreateBorrowRequest, Equipment};

pub use client::ApiClient;

/// Operations consumed from the lending API. Every call carries the bearer token.
#[async_trait]
pub trait LendingApi: Send + Sync {
    /// `GET /api/equipment/?available=true`
    async fn list_available_equipment(&self, token: &str) -> Result<Vec<Equipment>>;

    /// `GET /api/requests/my_requests/`
    async fn list_my_requests(&self, token: &str) -> Result<Vec<BorrowRequest>>;

    /// `POST /api/requests/`
    async fn create_request(&self, token: &str, body: &CreateBorrowRequest) -> Result<()>;
}
