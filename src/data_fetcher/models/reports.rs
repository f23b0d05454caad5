//! Output shapes produced by the transforms and the tool surface

use super::common::Circuit;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Compact view of a competition: id, name and optionally the circuit it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionSummary {
    #[serde(rename = "CompetitionID")]
    pub competition_id: Value,
    #[serde(rename = "CompetitionName")]
    pub competition_name: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit: Option<Circuit>,
}

/// Overall match record plus the innings blocks that could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummaryReport {
    pub overall: Value,
    pub innings_details: Vec<Value>,
}

/// Structured "not found" result. Returned as a value, never raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupMiss {
    pub error: String,
}

impl LookupMiss {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
