//! Lending API HTTP client

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{BorrowRequest, CreateBorrowRequest, Equipment, ListEnvelope};

use super::LendingApi;

const MY_REQUESTS_PATH: &str = "/api/requests/my_requests/";
const AVAILABLE_EQUIPMENT_PATH: &str = "/api/equipment/?available=true";
const CREATE_REQUEST_PATH: &str = "/api/requests/";

/// reqwest-backed lending API client
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new client for `base_url` (e.g. `http://localhost:8000`)
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = crate::config::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(Error::config("API base URL is empty"));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        log::debug!("[api] GET {}", url);

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        let response = check_read_status(response).await?;

        let body = response.text().await?;
        let envelope: ListEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.into_items())
    }
}

/// Map a non-2xx read response to a typed error
async fn check_read_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Unauthorized { status: status.as_u16() });
    }

    let message = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl LendingApi for ApiClient {
    async fn list_available_equipment(&self, token: &str) -> Result<Vec<Equipment>> {
        self.get_list(AVAILABLE_EQUIPMENT_PATH, token).await
    }

    async fn list_my_requests(&self, token: &str) -> Result<Vec<BorrowRequest>> {
        self.get_list(MY_REQUESTS_PATH, token).await
    }

    async fn create_request(&self, token: &str, body: &CreateBorrowRequest) -> Result<()> {
        let url = self.url(CREATE_REQUEST_PATH);
        log::debug!("[api] POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The error body is not interpreted
            log::warn!("[api] Create request rejected with HTTP {}", status);
            return Err(Error::submit_failed());
        }

        Ok(())
    }
}
