//! Points-table grouping and projection

use serde_json::{Map, Value};

use super::json_access::{array_field, field_or_null, id_string, parse_int_or_default};

/// Category name → teams, in category declaration order
pub type GroupedStandings = Map<String, Value>;

/// Fields kept for each team by [`simplify_standings`]
pub const SIMPLIFIED_TEAM_FIELDS: [&str; 14] = [
    "OrderNo",
    "TeamID",
    "TeamCode",
    "TeamName",
    "Matches",
    "Wins",
    "Loss",
    "Tied",
    "NoResult",
    "Draw",
    "Points",
    "NetRunRate",
    "Quotient",
    "Performance",
];

/// Groups the `points` rows of a standings document by their `Category`.
///
/// Every declared category appears as a key, even with no teams. Teams in an
/// undeclared category are dropped. Within a category teams are sorted by
/// `OrderNo` as an integer (malformed or missing counts as 0); the sort is
/// stable. A document without categories yields an empty map.
pub fn group_standings(doc: &Value) -> GroupedStandings {
    let categories = array_field(doc, "category");
    if categories.is_empty() {
        return Map::new();
    }

    let mut groups: Vec<(String, Vec<Value>)> = Vec::new();
    for category in categories {
        if let Some(name) = id_string(category.get("Category"))
            && !groups.iter().any(|(existing, _)| existing == &name)
        {
            groups.push((name, Vec::new()));
        }
    }

    for team in array_field(doc, "points") {
        let Some(category) = id_string(team.get("Category")) else {
            continue;
        };
        if let Some((_, teams)) = groups.iter_mut().find(|(name, _)| *name == category) {
            teams.push(team.clone());
        }
    }

    groups
        .into_iter()
        .map(|(name, mut teams)| {
            teams.sort_by_key(|team| parse_int_or_default(team.get("OrderNo"), 0));
            (name, Value::Array(teams))
        })
        .collect()
}

/// Projects every team of grouped standings onto [`SIMPLIFIED_TEAM_FIELDS`].
/// Missing fields are present as `null`. Category and team order are kept.
pub fn simplify_standings(grouped: &GroupedStandings) -> GroupedStandings {
    grouped
        .iter()
        .map(|(category, teams)| {
            let simplified: Vec<Value> = teams
                .as_array()
                .map(Vec::as_slice)
                .unwrap_or(&[])
                .iter()
                .map(simplify_team)
                .collect();
            (category.clone(), Value::Array(simplified))
        })
        .collect()
}

fn simplify_team(team: &Value) -> Value {
    let projected: Map<String, Value> = SIMPLIFIED_TEAM_FIELDS
        .iter()
        .map(|field| (field.to_string(), field_or_null(team, field)))
        .collect();
    Value::Object(projected)
}
