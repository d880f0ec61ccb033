//! Request form bounds
//!
//! Advisory limits for the borrow request form: the view applies them while
//! the draft is edited. They are not re-checked at submission time.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Equipment, RequestFormDraft};

use super::catalog::find_equipment;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Equipment,
    Quantity,
    Purpose,
    BorrowFrom,
    BorrowUntil,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Equipment => "Equipment",
            FormField::Quantity => "Quantity",
            FormField::Purpose => "Purpose",
            FormField::BorrowFrom => "Borrow From",
            FormField::BorrowUntil => "Borrow Until",
        }
    }
}

/// A bound the draft currently violates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldIssue {
    #[error("{} is required", .0.label())]
    Required(FormField),

    #[error("Quantity must be at least {min}")]
    QuantityBelowMin { min: u32 },

    #[error("Quantity {requested} exceeds the {max} available")]
    QuantityAboveMax { requested: u32, max: u32 },

    #[error("{} is not a valid date: {value}", .field.label())]
    InvalidDate { field: FormField, value: String },

    #[error("{} must be on or after {min}", .field.label())]
    DateBeforeMin { field: FormField, min: NaiveDate },
}

impl FieldIssue {
    /// Empty required field. Range issues are advisory, these block the form.
    pub fn is_required(&self) -> bool {
        matches!(self, FieldIssue::Required(_))
    }
}

/// Widget bounds derived from the draft, the catalog and today's date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormBounds {
    pub quantity_min: u32,
    pub quantity_max: u32,
    pub borrow_from_min: NaiveDate,
    pub borrow_until_min: NaiveDate,
}

impl FormBounds {
    pub fn for_draft(draft: &RequestFormDraft, catalog: &[Equipment], today: NaiveDate) -> Self {
        // Falls back to 1 with no selection or nothing available
        let quantity_max = find_equipment(catalog, &draft.equipment)
            .map(|e| e.available_quantity)
            .filter(|available| *available > 0)
            .unwrap_or(1);

        let borrow_until_min = parse_form_date(&draft.borrow_from).unwrap_or(today);

        Self {
            quantity_min: 1,
            quantity_max,
            borrow_from_min: today,
            borrow_until_min,
        }
    }
}

/// Current calendar date on the client clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date input value (`YYYY-MM-DD`); empty or malformed gives `None`
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// List every bound the draft violates, in field order
pub fn check(draft: &RequestFormDraft, bounds: &FormBounds) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if draft.equipment.trim().is_empty() {
        issues.push(FieldIssue::Required(FormField::Equipment));
    }

    if draft.quantity < bounds.quantity_min {
        issues.push(FieldIssue::QuantityBelowMin { min: bounds.quantity_min });
    } else if draft.quantity > bounds.quantity_max {
        issues.push(FieldIssue::QuantityAboveMax {
            requested: draft.quantity,
            max: bounds.quantity_max,
        });
    }

    if draft.purpose.trim().is_empty() {
        issues.push(FieldIssue::Required(FormField::Purpose));
    }

    check_date(&mut issues, FormField::BorrowFrom, &draft.borrow_from, bounds.borrow_from_min);
    check_date(&mut issues, FormField::BorrowUntil, &draft.borrow_until, bounds.borrow_until_min);

    issues
}

fn check_date(issues: &mut Vec<FieldIssue>, field: FormField, value: &str, min: NaiveDate) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::Required(field));
        return;
    }

    match parse_form_date(value) {
        Some(date) if date < min => issues.push(FieldIssue::DateBeforeMin { field, min }),
        Some(_) => {}
        None => issues.push(FieldIssue::InvalidDate {
            field,
            value: value.to_string(),
        }),
    }
}
