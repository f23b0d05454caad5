//! Typed arguments of the registered tools.
//!
//! Arguments arrive as a JSON object. Omitted optional fields fall back to
//! their defaults; `circuit` defaults to domestic.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::data_fetcher::models::{Circuit, MatchStatus};
use crate::error::AppError;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CircuitParams {
    #[serde(default)]
    pub circuit: Circuit,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub circuit: Option<Circuit>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TournamentParams {
    pub competition_id: u64,
    #[serde(default)]
    pub circuit: Circuit,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StandingsParams {
    pub competition_id: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScheduleParams {
    pub competition_id: u64,
    #[serde(default)]
    pub circuit: Circuit,
    #[serde(default)]
    pub match_status: Option<MatchStatus>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchSummaryParams {
    pub match_id: u64,
    #[serde(default)]
    pub circuit: Circuit,
    #[serde(default)]
    pub innings: Option<u32>,
}

/// Decodes tool arguments, treating `null` as an empty object.
pub fn decode<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, AppError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args)
        .map_err(|e| AppError::invalid_argument(format!("invalid arguments for {tool}: {e}")))
}
