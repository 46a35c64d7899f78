//! Display helpers and semantic checks for project records.

use std::collections::HashSet;

use crate::project::Project;

/// Descriptions longer than this are truncated on the project card.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Card text: the first [`DESCRIPTION_MAX_CHARS`] characters plus `...`, or
/// the whole description when it fits.
pub fn truncated_description(description: &str) -> String {
    if !shows_read_more(description) {
        return description.to_string();
    }
    let mut truncated: String = description.chars().take(DESCRIPTION_MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}

/// True when the card should offer the full description on hover.
pub fn shows_read_more(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_MAX_CHARS
}

/// Check invariants not expressible in JSON Schema:
/// - titles are not blank
/// - titles are unique
pub fn validate_records(records: &[Project]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if record.title.trim().is_empty() {
            errors.push(format!("project #{}: title must not be blank", index));
            continue;
        }
        if !seen.insert(record.title.as_str()) {
            errors.push(format!(
                "project #{}: duplicate title '{}'",
                index, record.title
            ));
        }
    }
    errors
}
