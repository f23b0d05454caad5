//! Pure transforms over parsed feed documents. No I/O happens here.

pub mod competitions;
pub mod innings;
pub mod json_access;
pub mod schedule;
pub mod standings;

pub use competitions::{filter_live, find_competition, search, summarize};
pub use innings::{INNINGS_FIELDS, current_innings, innings_key, match_record, project_innings};
pub use json_access::{array_field, field_or_null, id_string, parse_int_or_default, str_field};
pub use schedule::{filter_by_schedule, schedule_matches};
pub use standings::{GroupedStandings, SIMPLIFIED_TEAM_FIELDS, group_standings, simplify_standings};
