use serde_json::{Map, Value};

use super::json_access::{array_field, parse_int_or_default};

/// Scorecard blocks kept from a standalone innings payload
pub const INNINGS_FIELDS: [&str; 4] = ["BattingCard", "BowlingCard", "Extras", "FallOfWickets"];

/// Key of an innings block, e.g. `Innings2`
pub fn innings_key(innings: u32) -> String {
    format!("Innings{innings}")
}

/// Reduces an innings payload to `{"InningsN": {BattingCard, BowlingCard, Extras, FallOfWickets}}`.
/// Blocks missing upstream stay absent.
pub fn project_innings(doc: &Value, innings: u32) -> Value {
    let key = innings_key(innings);
    let projected: Map<String, Value> = match doc.get(&key) {
        Some(block) => INNINGS_FIELDS
            .iter()
            .filter_map(|field| block.get(*field).map(|v| (field.to_string(), v.clone())))
            .collect(),
        None => Map::new(),
    };
    let mut wrapped = Map::new();
    wrapped.insert(key, Value::Object(projected));
    Value::Object(wrapped)
}

/// First record of a match summary document, if any
pub fn match_record(doc: &Value) -> Option<&Value> {
    array_field(doc, "MatchSummary").first()
}

/// Innings played so far according to a match record
pub fn current_innings(record: &Value) -> u32 {
    let played = parse_int_or_default(record.get("CurrentInnings"), 0);
    u32::try_from(played).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_innings_keeps_scorecard_blocks_in_order() {
        let doc = json!({
            "Innings1": {
                "FallOfWickets": [],
                "PartnershipBreak": [],
                "Extras": [{"Total": "12"}],
                "BowlingCard": [],
                "BattingCard": [{"PlayerName": "A"}],
                "ManhattanGraph": []
            }
        });
        let projected = project_innings(&doc, 1);
        let keys: Vec<_> = projected["Innings1"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, INNINGS_FIELDS.to_vec());
        assert_eq!(projected["Innings1"]["Extras"], json!([{"Total": "12"}]));
    }

    #[test]
    fn test_project_innings_leaves_missing_blocks_absent() {
        let projected = project_innings(&json!({"Innings2": {"BattingCard": []}}), 2);
        assert_eq!(projected, json!({"Innings2": {"BattingCard": []}}));

        let missing = project_innings(&json!({"Innings1": {}}), 3);
        assert_eq!(missing, json!({"Innings3": {}}));
    }

    #[test]
    fn test_match_record_and_current_innings() {
        let doc = json!({"MatchSummary": [{"MatchID": 999, "CurrentInnings": "2"}]});
        let record = match_record(&doc).unwrap();
        assert_eq!(current_innings(record), 2);

        assert!(match_record(&json!({"MatchSummary": []})).is_none());
        assert_eq!(current_innings(&json!({"CurrentInnings": "-1"})), 0);
        assert_eq!(current_innings(&json!({})), 0);
    }
}
