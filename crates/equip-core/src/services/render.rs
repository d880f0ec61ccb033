//! Request list rendering helpers
//!
//! Status badges and date formatting for the "My Requests" list.

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::models::{BorrowRequest, RequestStatus};

/// Shown when the viewer has no requests
pub const EMPTY_LIST_MESSAGE: &str = "No requests yet. Start by borrowing some equipment!";

/// Shown in place of a date that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Badge colour family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Yellow,
    Green,
    Red,
    Blue,
    Gray,
}

impl BadgeTone {
    /// Badge classes used by the web dashboards
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Yellow => "bg-yellow-500/10 text-yellow-600 border-yellow-500/20",
            BadgeTone::Green => "bg-green-500/10 text-green-600 border-green-500/20",
            BadgeTone::Red => "bg-red-500/10 text-red-600 border-red-500/20",
            BadgeTone::Blue => "bg-blue-500/10 text-blue-600 border-blue-500/20",
            BadgeTone::Gray => "bg-gray-500/10 text-gray-600 border-gray-500/20",
        }
    }
}

/// Display label plus colour for a status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub tone: BadgeTone,
}

/// Map a status to its badge. Unknown statuses get the `returned` style.
pub fn classify(status: &RequestStatus) -> StatusBadge {
    let tone = match status {
        RequestStatus::Pending => BadgeTone::Yellow,
        RequestStatus::Approved => BadgeTone::Green,
        RequestStatus::Rejected => BadgeTone::Red,
        RequestStatus::Issued => BadgeTone::Blue,
        RequestStatus::Returned | RequestStatus::Other(_) => BadgeTone::Gray,
    };

    StatusBadge {
        label: capitalize(status.as_str()),
        tone,
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a server date as `M/D/YYYY`.
///
/// The layout is fixed to the en-US short date and does not follow the
/// process locale; `chrono` carries no locale data without its
/// `unstable-locales` feature. Bare `YYYY-MM-DD` values are calendar dates and are not shifted. Full
/// timestamps are shown in the local timezone.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%-m/%-d/%Y").to_string();
    }

    INVALID_DATE.to_string()
}

/// One rendered entry of the request list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestCard {
    pub id: i64,
    pub equipment: String,
    pub quantity: u32,
    pub purpose: String,
    pub badge: StatusBadge,
    pub from: String,
    pub until: String,
}

impl From<&BorrowRequest> for RequestCard {
    fn from(request: &BorrowRequest) -> Self {
        Self {
            id: request.id,
            equipment: request.equipment.name.clone(),
            quantity: request.quantity,
            purpose: request.purpose.clone(),
            badge: classify(&request.status),
            from: format_date(&request.borrow_from),
            until: format_date(&request.borrow_until),
        }
    }
}
