use serde_json::Value;
use std::collections::HashSet;

use super::json_access::{array_field, field_or_null, id_string, str_field};
use crate::data_fetcher::models::{Circuit, CompetitionSummary};

/// Returns the competitions whose id appears in the catalog's
/// `livecompetition` list. Ids are compared as strings.
pub fn filter_live(catalog: &Value) -> Vec<Value> {
    let live_ids: HashSet<String> = array_field(catalog, "livecompetition")
        .iter()
        .filter_map(|item| id_string(item.get("CompetitionID")))
        .filter(|id| !id.is_empty())
        .collect();

    array_field(catalog, "competition")
        .iter()
        .filter(|comp| {
            id_string(comp.get("CompetitionID")).is_some_and(|id| live_ids.contains(&id))
        })
        .cloned()
        .collect()
}

/// Projects competitions down to id and name, tagging each with `circuit` when given.
pub fn summarize(competitions: &[Value], circuit: Option<Circuit>) -> Vec<CompetitionSummary> {
    competitions
        .iter()
        .map(|comp| CompetitionSummary {
            competition_id: field_or_null(comp, "CompetitionID"),
            competition_name: field_or_null(comp, "CompetitionName"),
            circuit,
        })
        .collect()
}

/// Case-insensitive substring search on `CompetitionName`.
/// Competitions without a name never match.
pub fn search(
    competitions: &[Value],
    query: &str,
    circuit: Option<Circuit>,
) -> Vec<CompetitionSummary> {
    let needle = query.to_lowercase();
    let matches: Vec<Value> = competitions
        .iter()
        .filter(|comp| {
            str_field(comp, "CompetitionName")
                .filter(|name| !name.is_empty())
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    summarize(&matches, circuit)
}

/// Linear scan for a competition by id.
pub fn find_competition<'a>(catalog: &'a Value, competition_id: &str) -> Option<&'a Value> {
    array_field(catalog, "competition")
        .iter()
        .find(|comp| id_string(comp.get("CompetitionID")).as_deref() == Some(competition_id))
}
