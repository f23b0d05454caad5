//! Endpoint catalog and URL building utilities for the scores feed

use crate::data_fetcher::models::Circuit;

/// Logical feeds exposed by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    Competitions,
    Standings,
    Schedule,
    MatchSummary,
    Innings,
}

impl Feed {
    /// Stable name used for cache keys and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Feed::Competitions => "competitions",
            Feed::Standings => "standings",
            Feed::Schedule => "schedule",
            Feed::MatchSummary => "matchsummary",
            Feed::Innings => "innings",
        }
    }
}

/// Domestic competitions catalog
pub const DOMESTIC_COMPETITIONS: &str = "/feeds/competition.js";
/// International competitions catalog
pub const INTERNATIONAL_COMPETITIONS: &str = "/feeds-international/competition.js";
/// Group standings, shared by both circuits
pub const STANDINGS: &str = "/feeds/stats/{CompetitionID}-groupstandings.js";
/// Domestic fixtures of a competition
pub const DOMESTIC_SCHEDULE: &str = "/feeds/{CompetitionID}-matchschedule.js";
/// International fixtures of a competition
pub const INTERNATIONAL_SCHEDULE: &str =
    "/feeds-international/scoringfeeds/{CompetitionID}-matchschedule.js";
/// Domestic overall match summary
pub const DOMESTIC_MATCH_SUMMARY: &str = "/feeds/scoringfeeds/{MatchID}-matchsummary.js";
/// International overall match summary
pub const INTERNATIONAL_MATCH_SUMMARY: &str =
    "/feeds-international/scoringfeeds/{MatchID}-matchsummary.js";
/// Domestic innings scorecard
pub const DOMESTIC_INNINGS: &str = "/feeds/scoringfeeds/{MatchID}-Innings{N}.js";
/// International innings scorecard, served from a different host
pub const INTERNATIONAL_INNINGS: &str =
    "https://www.bcci.tv/getInternationalMatchInnings?inning=Innings{N}&competitionId={MatchID}";

/// Static mapping of (feed, circuit) to URL template.
///
/// Templates use `{Name}` placeholders. Templates starting with a scheme are
/// absolute and never joined to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCatalog {
    pub domestic_competitions: String,
    pub international_competitions: String,
    pub standings: String,
    pub domestic_schedule: String,
    pub international_schedule: String,
    pub domestic_match_summary: String,
    pub international_match_summary: String,
    pub domestic_innings: String,
    pub international_innings: String,
}

impl Default for EndpointCatalog {
    fn default() -> Self {
        Self {
            domestic_competitions: DOMESTIC_COMPETITIONS.to_string(),
            international_competitions: INTERNATIONAL_COMPETITIONS.to_string(),
            standings: STANDINGS.to_string(),
            domestic_schedule: DOMESTIC_SCHEDULE.to_string(),
            international_schedule: INTERNATIONAL_SCHEDULE.to_string(),
            domestic_match_summary: DOMESTIC_MATCH_SUMMARY.to_string(),
            international_match_summary: INTERNATIONAL_MATCH_SUMMARY.to_string(),
            domestic_innings: DOMESTIC_INNINGS.to_string(),
            international_innings: INTERNATIONAL_INNINGS.to_string(),
        }
    }
}

impl EndpointCatalog {
    /// Replaces the absolute international innings template
    pub fn with_international_innings(mut self, template: impl Into<String>) -> Self {
        self.international_innings = template.into();
        self
    }

    /// Returns the URL template for a feed on a circuit
    pub fn template(&self, feed: Feed, circuit: Circuit) -> &str {
        match (feed, circuit) {
            (Feed::Competitions, Circuit::Domestic) => &self.domestic_competitions,
            (Feed::Competitions, Circuit::International) => &self.international_competitions,
            (Feed::Standings, _) => &self.standings,
            (Feed::Schedule, Circuit::Domestic) => &self.domestic_schedule,
            (Feed::Schedule, Circuit::International) => &self.international_schedule,
            (Feed::MatchSummary, Circuit::Domestic) => &self.domestic_match_summary,
            (Feed::MatchSummary, Circuit::International) => &self.international_match_summary,
            (Feed::Innings, Circuit::Domestic) => &self.domestic_innings,
            (Feed::Innings, Circuit::International) => &self.international_innings,
        }
    }
}

/// Substitutes `{Name}` placeholders in a template.
///
/// # Example
/// ```
/// use bcci_feed::data_fetcher::api::resolve_template;
///
/// let path = resolve_template("/feeds/stats/{CompetitionID}-groupstandings.js", &[("CompetitionID", "318")]);
/// assert_eq!(path, "/feeds/stats/318-groupstandings.js");
/// ```
pub fn resolve_template(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}

/// Whether a resolved template already carries its own scheme and host
pub fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Builds the full URL for a resolved template.
///
/// # Example
/// ```
/// use bcci_feed::data_fetcher::api::full_url;
///
/// assert_eq!(full_url("https://scores.bcci.tv/", "/feeds/competition.js"), "https://scores.bcci.tv/feeds/competition.js");
/// assert_eq!(full_url("https://scores.bcci.tv", "https://other.example.com/x?y=1"), "https://other.example.com/x?y=1");
/// ```
pub fn full_url(base_url: &str, resolved: &str) -> String {
    if is_absolute(resolved) {
        resolved.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            resolved.trim_start_matches('/')
        )
    }
}
