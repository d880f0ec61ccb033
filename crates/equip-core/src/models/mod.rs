//! Data models for the SchoolEquip client

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// User role as stored alongside the access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Student,
    Staff,
    Admin,
    /// Anything else the store held (malformed or future roles)
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::Admin => "admin",
            Role::Unknown(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "student" => Role::Student,
            "staff" => Role::Staff,
            "admin" => Role::Admin,
            other => Role::Unknown(other.to_string()),
        }
    }

    /// Admins and staff share the admin dashboard
    pub fn is_admin_like(&self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Non-string roles still belong to a logged-in viewer
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(raw) => Role::from_str(&raw),
            other => Role::Unknown(other.to_string()),
        })
    }
}

/// Stored credential. The token is opaque and only forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "access_token")]
    pub token: String,
    #[serde(rename = "user_role", default)]
    pub role: Option<Role>,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role: Some(role),
        }
    }

    /// A stored but empty token counts as anonymous
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Equipment item as listed by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub available_quantity: u32,
}

/// Equipment reference embedded in a borrow request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRef {
    pub id: i64,
    pub name: String,
}

/// Borrow request status. Unrecognised values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Issued,
    Returned,
    Other(String),
}

impl RequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Issued => "issued",
            RequestStatus::Returned => "returned",
            RequestStatus::Other(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => RequestStatus::Pending,
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            "issued" => RequestStatus::Issued,
            "returned" => RequestStatus::Returned,
            other => RequestStatus::Other(other.to_string()),
        }
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RequestStatus::from_str(&raw))
    }
}

/// Borrow request owned by the server; the client only reads it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub id: i64,
    pub equipment: EquipmentRef,
    pub quantity: u32,
    #[serde(default)]
    pub purpose: String,
    pub status: RequestStatus,
    pub borrow_from: String,
    pub borrow_until: String,
    #[serde(default)]
    pub created_at: String,
}

/// Client-local form state behind the "Create Borrow Request" dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFormDraft {
    /// Selected equipment id as entered, empty when nothing is selected
    pub equipment: String,
    pub quantity: u32,
    pub purpose: String,
    pub borrow_from: String,
    pub borrow_until: String,
}

impl Default for RequestFormDraft {
    fn default() -> Self {
        Self {
            equipment: String::new(),
            quantity: 1,
            purpose: String::new(),
            borrow_from: String::new(),
            borrow_until: String::new(),
        }
    }
}

/// POST body for creating a borrow request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBorrowRequest {
    pub equipment: i64,
    pub quantity: u32,
    pub purpose: String,
    pub borrow_from: String,
    pub borrow_until: String,
}

/// List response: either a bare array or a `{"results": [...]}` envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { results: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { results } => results,
        }
    }
}
