pub mod common;
pub mod reports;

pub use common::{Circuit, MatchStatus};
pub use reports::{CompetitionSummary, LookupMiss, MatchSummaryReport};
