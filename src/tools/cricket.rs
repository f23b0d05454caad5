use futures::future::join_all;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::constants::innings;
use crate::data_fetcher::api::FeedClient;
use crate::data_fetcher::models::{
    Circuit, CompetitionSummary, LookupMiss, MatchStatus, MatchSummaryReport,
};
use crate::data_fetcher::processors::{
    GroupedStandings, array_field, current_innings, filter_by_schedule, filter_live,
    find_competition, group_standings, match_record, schedule_matches, search, simplify_standings,
    summarize,
};
use crate::error::AppError;

/// Orchestrates feed fetches and transforms into the published tool results.
#[derive(Debug, Clone)]
pub struct CricketTools {
    client: FeedClient,
}

impl CricketTools {
    pub fn new(client: FeedClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(FeedClient::from_config(config)?))
    }

    pub fn client(&self) -> &FeedClient {
        &self.client
    }

    /// Every competition of a circuit, served from the disk cache when fresh.
    #[instrument(skip(self))]
    pub async fn get_competitions(&self, circuit: Circuit) -> Result<Vec<Value>, AppError> {
        let catalog = self.client.competitions(circuit, true).await?;
        Ok(array_field(&catalog, "competition").to_vec())
    }

    /// Competitions currently live. Always reads the network.
    #[instrument(skip(self))]
    pub async fn get_live_tournaments(
        &self,
        circuit: Circuit,
    ) -> Result<Vec<CompetitionSummary>, AppError> {
        let catalog = self.client.competitions(circuit, false).await?;
        let live = filter_live(&catalog);
        info!("Found {} live {} competitions", live.len(), circuit);
        Ok(summarize(&live, Some(circuit)))
    }

    /// Name search. Without a circuit, domestic is searched first and
    /// international only when domestic has no match.
    #[instrument(skip(self))]
    pub async fn search_competitions(
        &self,
        query: &str,
        circuit: Option<Circuit>,
    ) -> Result<Vec<CompetitionSummary>, AppError> {
        if let Some(circuit) = circuit {
            return self.search_circuit(query, circuit).await;
        }

        let domestic = self.search_circuit(query, Circuit::Domestic).await?;
        if !domestic.is_empty() {
            debug!("Domestic search matched {}, skipping international", domestic.len());
            return Ok(domestic);
        }
        self.search_circuit(query, Circuit::International).await
    }

    async fn search_circuit(
        &self,
        query: &str,
        circuit: Circuit,
    ) -> Result<Vec<CompetitionSummary>, AppError> {
        let catalog = self.client.competitions(circuit, true).await?;
        Ok(search(array_field(&catalog, "competition"), query, Some(circuit)))
    }

    /// Full competition record, or `{"error": ...}` when the id is unknown.
    #[instrument(skip(self))]
    pub async fn get_tournament_details(
        &self,
        competition_id: u64,
        circuit: Circuit,
    ) -> Result<Value, AppError> {
        let catalog = self.client.competitions(circuit, true).await?;
        match find_competition(&catalog, &competition_id.to_string()) {
            Some(record) => Ok(record.clone()),
            None => {
                let miss = LookupMiss::new(format!(
                    "Competition {competition_id} not found in {circuit} competitions"
                ));
                Ok(serde_json::to_value(miss)?)
            }
        }
    }

    /// Points table grouped by category with each team reduced to the
    /// simplified field set.
    #[instrument(skip(self))]
    pub async fn get_tournament_standings(
        &self,
        competition_id: u64,
    ) -> Result<GroupedStandings, AppError> {
        let doc = self.client.standings(competition_id).await?;
        Ok(simplify_standings(&group_standings(&doc)))
    }

    /// Schedule matches, optionally narrowed to one status.
    #[instrument(skip(self))]
    pub async fn get_tournament_schedule(
        &self,
        competition_id: u64,
        circuit: Circuit,
        status: Option<MatchStatus>,
    ) -> Result<Vec<Value>, AppError> {
        let doc = self.client.schedule(competition_id, circuit).await?;
        let matches = schedule_matches(&doc);
        Ok(match status {
            Some(status) => filter_by_schedule(status.as_str(), matches),
            None => matches.to_vec(),
        })
    }

    /// With `innings`, one projected innings. Otherwise the overall record plus
    /// every innings played so far, fetched concurrently. Innings that fail to
    /// fetch are left out.
    #[instrument(skip(self))]
    pub async fn get_match_summary(
        &self,
        match_id: u64,
        circuit: Circuit,
        innings: Option<u32>,
    ) -> Result<Value, AppError> {
        if let Some(innings) = innings {
            return self.client.innings(match_id, circuit, innings).await;
        }

        let summary = self.client.match_summary(match_id, circuit, None).await?;
        let (overall, played) = match match_record(&summary) {
            Some(record) => (record.clone(), current_innings(record)),
            None => (Value::Object(Map::new()), 0),
        };

        let results = self.fetch_innings(match_id, circuit, played).await;
        let innings_details = results
            .into_iter()
            .filter_map(|(n, result)| match result {
                Ok(detail) => Some(detail),
                Err(e) => {
                    warn!("Dropping innings {} of match {}: {}", n, match_id, e);
                    None
                }
            })
            .collect();

        Ok(serde_json::to_value(MatchSummaryReport {
            overall,
            innings_details,
        })?)
    }

    /// Fetches innings `1..=min(played, 4)` in parallel, keeping each outcome
    /// next to its innings number in ascending order.
    async fn fetch_innings(
        &self,
        match_id: u64,
        circuit: Circuit,
        played: u32,
    ) -> Vec<(u32, Result<Value, AppError>)> {
        let last = played.min(innings::MAX);
        if last < innings::MIN {
            return Vec::new();
        }

        let fetch_futures = (innings::MIN..=last).map(|n| async move {
            (n, self.client.innings(match_id, circuit, n).await)
        });
        join_all(fetch_futures).await
    }

    /// Serialized `[{CompetitionID, CompetitionName}]` for a circuit's catalog resource.
    pub async fn competitions_resource(&self, circuit: Circuit) -> Result<String, AppError> {
        let competitions = self.get_competitions(circuit).await?;
        let summaries = summarize(&competitions, None);
        Ok(serde_json::to_string(&summaries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::EndpointCatalog;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::cache::DiskCache;
    use serde_json::json;
    use tempfile::{TempDir, tempdir};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const DOMESTIC_CATALOG: &str = r#"oncomptetion({
        "competition": [
            {"CompetitionID": "1", "CompetitionName": "Live Match A"},
            {"CompetitionID": "2", "CompetitionName": "Finished Match B"},
            {"CompetitionID": "3", "CompetitionName": "Live Match C"},
            {"CompetitionID": "4", "CompetitionName": "Upcoming Match D"},
            {"CompetitionID": 326, "CompetitionName": "COOCH BEHAR TROPHY"}
        ],
        "livecompetition": [{"CompetitionID": "1"}, {"CompetitionID": "3"}]
    });"#;

    const INTERNATIONAL_CATALOG: &str = r#"oncomptetion({
        "competition": [{"CompetitionID": "236", "CompetitionName": "India tour of England"}],
        "livecompetition": []
    });"#;

    fn tools_for(server: &MockServer, temp_dir: &TempDir) -> CricketTools {
        CricketTools::new(FeedClient::new(
            create_test_http_client(),
            server.uri(),
            EndpointCatalog::default(),
            DiskCache::new(temp_dir.path()),
        ))
    }

    async fn mount(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_live_tournaments_tags_circuit() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(&server, "/feeds/competition.js", DOMESTIC_CATALOG).await;

        let tools = tools_for(&server, &temp_dir);
        let live = tools.get_live_tournaments(Circuit::Domestic).await.unwrap();
        assert_eq!(
            serde_json::to_value(&live).unwrap(),
            json!([
                {"CompetitionID": "1", "CompetitionName": "Live Match A", "circuit": "domestic"},
                {"CompetitionID": "3", "CompetitionName": "Live Match C", "circuit": "domestic"}
            ])
        );
    }

    #[tokio::test]
    async fn test_search_short_circuits_on_domestic_match() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(&server, "/feeds/competition.js", DOMESTIC_CATALOG).await;
        Mock::given(method("GET"))
            .and(path("/feeds-international/competition.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string(INTERNATIONAL_CATALOG))
            .expect(0)
            .mount(&server)
            .await;

        let tools = tools_for(&server, &temp_dir);
        let hits = tools.search_competitions("cooch", None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].competition_id, json!(326));
        assert_eq!(hits[0].circuit, Some(Circuit::Domestic));
    }

    #[tokio::test]
    async fn test_search_falls_through_to_international() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(&server, "/feeds/competition.js", DOMESTIC_CATALOG).await;
        mount(
            &server,
            "/feeds-international/competition.js",
            INTERNATIONAL_CATALOG,
        )
        .await;

        let tools = tools_for(&server, &temp_dir);
        let hits = tools.search_competitions("england", None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].circuit, Some(Circuit::International));

        let none = tools.search_competitions("ranji", None).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_with_circuit_queries_only_that_circuit() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        Mock::given(method("GET"))
            .and(path("/feeds/competition.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DOMESTIC_CATALOG))
            .expect(0)
            .mount(&server)
            .await;
        mount(
            &server,
            "/feeds-international/competition.js",
            INTERNATIONAL_CATALOG,
        )
        .await;

        let tools = tools_for(&server, &temp_dir);
        let hits = tools
            .search_competitions("live", Some(Circuit::International))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_get_tournament_details_found_and_missing() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(&server, "/feeds/competition.js", DOMESTIC_CATALOG).await;

        let tools = tools_for(&server, &temp_dir);
        let found = tools
            .get_tournament_details(326, Circuit::Domestic)
            .await
            .unwrap();
        assert_eq!(found["CompetitionName"], json!("COOCH BEHAR TROPHY"));

        let missing = tools
            .get_tournament_details(9999, Circuit::Domestic)
            .await
            .unwrap();
        assert!(missing["error"].as_str().unwrap().contains("9999"));
    }

    #[tokio::test]
    async fn test_get_tournament_schedule_without_status_returns_all() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(
            &server,
            "/feeds/41-matchschedule.js",
            r#"MatchSchedule({"Matchsummary":[{"MatchStatus":"Post"},{"MatchStatus":"Live"}]});"#,
        )
        .await;
        mount(&server, "/feeds/42-matchschedule.js", r#"MatchSchedule({});"#).await;

        let tools = tools_for(&server, &temp_dir);
        let all = tools
            .get_tournament_schedule(41, Circuit::Domestic, None)
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let live = tools
            .get_tournament_schedule(41, Circuit::Domestic, Some(MatchStatus::Live))
            .await
            .unwrap();
        assert_eq!(live, vec![json!({"MatchStatus": "Live"})]);

        let empty = tools
            .get_tournament_schedule(42, Circuit::Domestic, None)
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_match_summary_drops_failed_innings() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(
            &server,
            "/feeds/scoringfeeds/77-matchsummary.js",
            r#"onScoringMatchsummary({"MatchSummary":[{"MatchID":77,"CurrentInnings":"3"}]});"#,
        )
        .await;
        mount(
            &server,
            "/feeds/scoringfeeds/77-Innings1.js",
            r#"onScoringInnings({"Innings1":{"BattingCard":[{"PlayerName":"A"}]}});"#,
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/feeds/scoringfeeds/77-Innings2.js"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount(
            &server,
            "/feeds/scoringfeeds/77-Innings3.js",
            r#"onScoringInnings({"Innings3":{"Extras":[]}});"#,
        )
        .await;

        let tools = tools_for(&server, &temp_dir);
        let report = tools
            .get_match_summary(77, Circuit::Domestic, None)
            .await
            .unwrap();
        assert_eq!(report["overall"]["CurrentInnings"], json!("3"));
        assert_eq!(
            report["innings_details"],
            json!([
                {"Innings1": {"BattingCard": [{"PlayerName": "A"}]}},
                {"Innings3": {"Extras": []}}
            ])
        );
    }

    #[tokio::test]
    async fn test_match_summary_without_record_is_empty() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(
            &server,
            "/feeds/scoringfeeds/78-matchsummary.js",
            r#"onScoringMatchsummary({"MatchSummary":[]});"#,
        )
        .await;

        let tools = tools_for(&server, &temp_dir);
        let report = tools
            .get_match_summary(78, Circuit::Domestic, None)
            .await
            .unwrap();
        assert_eq!(report, json!({"overall": {}, "innings_details": []}));
    }

    #[tokio::test]
    async fn test_match_summary_caps_innings_at_four() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(
            &server,
            "/feeds/scoringfeeds/79-matchsummary.js",
            r#"onScoringMatchsummary({"MatchSummary":[{"CurrentInnings":"6"}]});"#,
        )
        .await;
        for n in 1..=4 {
            mount(
                &server,
                &format!("/feeds/scoringfeeds/79-Innings{n}.js"),
                &format!(r#"onScoringInnings({{"Innings{n}":{{"BattingCard":[]}}}});"#),
            )
            .await;
        }
        Mock::given(method("GET"))
            .and(path("/feeds/scoringfeeds/79-Innings5.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&server)
            .await;

        let tools = tools_for(&server, &temp_dir);
        let report = tools
            .get_match_summary(79, Circuit::Domestic, None)
            .await
            .unwrap();
        assert_eq!(report["innings_details"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_match_summary_overall_failure_is_fatal() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let tools = tools_for(&server, &temp_dir);
        let err = tools
            .get_match_summary(80, Circuit::Domestic, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiNotFound { .. }));
    }

    #[tokio::test]
    async fn test_competitions_resource_is_json_array_string() {
        let server = MockServer::start().await;
        let temp_dir = tempdir().unwrap();
        mount(
            &server,
            "/feeds-international/competition.js",
            INTERNATIONAL_CATALOG,
        )
        .await;

        let tools = tools_for(&server, &temp_dir);
        let payload = tools
            .competitions_resource(Circuit::International)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(
            parsed,
            json!([{"CompetitionID": "236", "CompetitionName": "India tour of England"}])
        );
    }
}
