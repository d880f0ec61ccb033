//! Borrow request helpers

use equip_core::{FieldIssue, FormBounds};

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One line per violated bound, plus the limits that applied
pub fn describe_issues(issues: &[FieldIssue], bounds: &FormBounds) -> Vec<String> {
    let mut lines: Vec<String> = issues.iter().map(|issue| format!("  - {}", issue)).collect();
    lines.push(format!(
        "  Limits: quantity {}..={}, from >= {}, until >= {}",
        bounds.quantity_min, bounds.quantity_max, bounds.borrow_from_min, bounds.borrow_until_min
    ));
    lines
}
