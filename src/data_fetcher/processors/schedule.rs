use serde_json::Value;

use super::json_access::{array_field, str_field};

/// Matches of a schedule document, or an empty slice when absent
pub fn schedule_matches(doc: &Value) -> &[Value] {
    array_field(doc, "Matchsummary")
}

/// Keeps matches whose `MatchStatus` equals `status`, ignoring case.
/// Partial matches do not count.
pub fn filter_by_schedule(status: &str, matches: &[Value]) -> Vec<Value> {
    let wanted = status.to_lowercase();
    matches
        .iter()
        .filter(|m| str_field(m, "MatchStatus").is_some_and(|s| s.to_lowercase() == wanted))
        .cloned()
        .collect()
}
