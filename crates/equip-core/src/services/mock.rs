//! In-memory `LendingApi` for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::LendingApi;
use crate::error::{Error, Result};
use crate::models::{
    BorrowRequest, CreateBorrowRequest, Equipment, EquipmentRef, RequestStatus,
};

pub fn equipment(id: i64, name: &str, available: u32) -> Equipment {
    Equipment {
        id,
        name: name.to_string(),
        available_quantity: available,
    }
}

pub fn borrow_request(id: i64, equipment_name: &str, status: &str) -> BorrowRequest {
    BorrowRequest {
        id,
        equipment: EquipmentRef {
            id,
            name: equipment_name.to_string(),
        },
        quantity: 1,
        purpose: "Class project".to_string(),
        status: RequestStatus::from_str(status),
        borrow_from: "2025-06-01".to_string(),
        borrow_until: "2025-06-05".to_string(),
        created_at: "2025-05-20T09:00:00Z".to_string(),
    }
}

/// Mock implementation of LendingApi for testing
pub struct MockLendingApi {
    equipment: Vec<Equipment>,
    requests: Mutex<Vec<BorrowRequest>>,
    read_failure: Option<u16>,
    reject_create: bool,
    created: Mutex<Vec<CreateBorrowRequest>>,
    tokens: Mutex<Vec<String>>,
    request_fetches: AtomicUsize,
}

impl MockLendingApi {
    pub fn new() -> Self {
        Self {
            equipment: Vec::new(),
            requests: Mutex::new(Vec::new()),
            read_failure: None,
            reject_create: false,
            created: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
            request_fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_equipment(mut self, equipment: Vec<Equipment>) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_requests(self, requests: Vec<BorrowRequest>) -> Self {
        *self.requests.lock().unwrap() = requests;
        self
    }

    /// Make every read answer with this HTTP status
    pub fn failing_reads(mut self, status: u16) -> Self {
        self.read_failure = Some(status);
        self
    }

    /// Make create answer with a non-2xx status
    pub fn rejecting_creates(mut self) -> Self {
        self.reject_create = true;
        self
    }

    pub fn created(&self) -> Vec<CreateBorrowRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    pub fn request_fetches(&self) -> usize {
        self.request_fetches.load(Ordering::SeqCst)
    }

    fn record_token(&self, token: &str) {
        self.tokens.lock().unwrap().push(token.to_string());
    }

    fn read_error(&self) -> Option<Error> {
        self.read_failure.map(|status| match status {
            401 | 403 => Error::Unauthorized { status },
            _ => Error::Api {
                status,
                message: "mock failure".to_string(),
            },
        })
    }
}

#[async_trait]
impl LendingApi for MockLendingApi {
    async fn list_available_equipment(&self, token: &str) -> Result<Vec<Equipment>> {
        self.record_token(token);
        if let Some(e) = self.read_error() {
            return Err(e);
        }
        Ok(self.equipment.clone())
    }

    async fn list_my_requests(&self, token: &str) -> Result<Vec<BorrowRequest>> {
        self.record_token(token);
        self.request_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.read_error() {
            return Err(e);
        }
        Ok(self.requests.lock().unwrap().clone())
    }

    async fn create_request(&self, token: &str, body: &CreateBorrowRequest) -> Result<()> {
        self.record_token(token);
        self.created.lock().unwrap().push(body.clone());
        if self.reject_create {
            return Err(Error::submit_failed());
        }

        let name = self
            .equipment
            .iter()
            .find(|e| e.id == body.equipment)
            .map(|e| e.name.clone())
            .unwrap_or_default();

        let mut requests = self.requests.lock().unwrap();
        let id = requests.len() as i64 + 1;
        requests.push(BorrowRequest {
            id,
            equipment: EquipmentRef {
                id: body.equipment,
                name,
            },
            quantity: body.quantity,
            purpose: body.purpose.clone(),
            status: RequestStatus::Pending,
            borrow_from: body.borrow_from.clone(),
            borrow_until: body.borrow_until.clone(),
            created_at: "2025-05-30T12:00:00Z".to_string(),
        });
        Ok(())
    }
}
