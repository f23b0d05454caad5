//! Name-addressed registration of tools and resources for an outer tool server.
//!
//! A tool is an async function from a JSON argument object to a JSON value.
//! A resource is an async provider of a string payload addressed by URI.
//! The transport that exposes them is not part of this crate.

use futures::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::cricket::CricketTools;
use super::params::{
    CircuitParams, MatchSummaryParams, ScheduleParams, SearchParams, StandingsParams,
    TournamentParams, decode,
};
use crate::data_fetcher::models::Circuit;
use crate::error::AppError;

pub type ToolHandler =
    Arc<dyn Fn(Value) -> BoxFuture<'static, Result<Value, AppError>> + Send + Sync>;
pub type ResourceHandler =
    Arc<dyn Fn() -> BoxFuture<'static, Result<String, AppError>> + Send + Sync>;

/// Kind of a tool parameter as advertised to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
    Enum(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolParam {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ToolParam {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub params: Vec<ToolParam>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceMetadata {
    pub uri: String,
    pub description: String,
}

#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, (ToolMetadata, ToolHandler)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any earlier one with the same name.
    pub fn register(&mut self, metadata: ToolMetadata, handler: ToolHandler) {
        debug!("Registering tool {}", metadata.name);
        self.tools.insert(metadata.name, (metadata, handler));
    }

    pub fn list(&self) -> Vec<&ToolMetadata> {
        self.tools.values().map(|(metadata, _)| metadata).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    #[instrument(skip(self, args))]
    pub async fn call(&self, name: &str, args: Value) -> Result<Value, AppError> {
        let (_, handler) = self
            .tools
            .get(name)
            .ok_or_else(|| AppError::tool_not_found(name))?;
        handler(args).await
    }
}

#[derive(Default, Clone)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, (ResourceMetadata, ResourceHandler)>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, metadata: ResourceMetadata, handler: ResourceHandler) {
        debug!("Registering resource {}", metadata.uri);
        self.resources.insert(metadata.uri.clone(), (metadata, handler));
    }

    pub fn list(&self) -> Vec<&ResourceMetadata> {
        self.resources.values().map(|(metadata, _)| metadata).collect()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[instrument(skip(self))]
    pub async fn read(&self, uri: &str) -> Result<String, AppError> {
        let (_, handler) = self
            .resources
            .get(uri)
            .ok_or_else(|| AppError::resource_not_found(uri))?;
        handler().await
    }
}

/// URI of a circuit's competition catalog resource
pub fn competitions_uri(circuit: Circuit) -> String {
    format!("bcci://competitions/{circuit}")
}

const CIRCUIT: ParamKind = ParamKind::Enum(&["domestic", "international"]);
const MATCH_STATUS: ParamKind = ParamKind::Enum(&["upcoming", "live", "post"]);

// Wraps a typed tool method as a JSON-in, JSON-out handler.
macro_rules! handler {
    ($tools:expr, $name:literal, $params:ty, |$t:ident, $p:ident| $body:expr) => {{
        let tools = Arc::clone(&$tools);
        let handler: ToolHandler =
            Arc::new(move |args: Value| -> BoxFuture<'static, Result<Value, AppError>> {
                let $t = Arc::clone(&tools);
                Box::pin(async move {
                    let $p: $params = decode($name, args)?;
                    let result = $body.await?;
                    Ok::<Value, AppError>(serde_json::to_value(result)?)
                })
            });
        handler
    }};
}

/// Registers every cricket tool and per-circuit resource.
pub fn register_all(tools: Arc<CricketTools>) -> (ToolRegistry, ResourceRegistry) {
    let mut registry = ToolRegistry::new();

    registry.register(
        ToolMetadata {
            name: "get_competitions",
            description: "List all competitions of a circuit",
            params: vec![ToolParam::optional("circuit", CIRCUIT)],
        },
        handler!(tools, "get_competitions", CircuitParams, |t, p| t
            .get_competitions(p.circuit)),
    );
    registry.register(
        ToolMetadata {
            name: "get_live_tournaments",
            description: "List competitions currently live in a circuit",
            params: vec![ToolParam::optional("circuit", CIRCUIT)],
        },
        handler!(tools, "get_live_tournaments", CircuitParams, |t, p| t
            .get_live_tournaments(p.circuit)),
    );
    registry.register(
        ToolMetadata {
            name: "search_competitions",
            description: "Search competitions by name. Without a circuit, international \
                          is searched only when domestic has no match",
            params: vec![
                ToolParam::required("query", ParamKind::String),
                ToolParam::optional("circuit", CIRCUIT),
            ],
        },
        handler!(tools, "search_competitions", SearchParams, |t, p| t
            .search_competitions(&p.query, p.circuit)),
    );
    registry.register(
        ToolMetadata {
            name: "get_tournament_details",
            description: "Full record of one competition",
            params: vec![
                ToolParam::required("competition_id", ParamKind::Integer),
                ToolParam::optional("circuit", CIRCUIT),
            ],
        },
        handler!(tools, "get_tournament_details", TournamentParams, |t, p| t
            .get_tournament_details(p.competition_id, p.circuit)),
    );
    registry.register(
        ToolMetadata {
            name: "get_tournament_standings",
            description: "Points table grouped by category",
            params: vec![ToolParam::required("competition_id", ParamKind::Integer)],
        },
        handler!(tools, "get_tournament_standings", StandingsParams, |t, p| t
            .get_tournament_standings(p.competition_id)),
    );
    registry.register(
        ToolMetadata {
            name: "get_tournament_schedule",
            description: "Matches of a competition, optionally filtered by status",
            params: vec![
                ToolParam::required("competition_id", ParamKind::Integer),
                ToolParam::optional("circuit", CIRCUIT),
                ToolParam::optional("match_status", MATCH_STATUS),
            ],
        },
        handler!(tools, "get_tournament_schedule", ScheduleParams, |t, p| t.get_tournament_schedule(
            p.competition_id,
            p.circuit,
            p.match_status
        )),
    );
    registry.register(
        ToolMetadata {
            name: "get_match_summary",
            description: "Match summary with innings scorecards, or one innings (1-4)",
            params: vec![
                ToolParam::required("match_id", ParamKind::Integer),
                ToolParam::optional("circuit", CIRCUIT),
                ToolParam::optional("innings", ParamKind::Integer),
            ],
        },
        handler!(tools, "get_match_summary", MatchSummaryParams, |t, p| t.get_match_summary(
            p.match_id,
            p.circuit,
            p.innings
        )),
    );

    let mut resources = ResourceRegistry::new();
    for circuit in Circuit::ALL {
        let tools = Arc::clone(&tools);
        let handler: ResourceHandler =
            Arc::new(move || -> BoxFuture<'static, Result<String, AppError>> {
                let tools = Arc::clone(&tools);
                Box::pin(async move { tools.competitions_resource(circuit).await })
            });
        resources.register(
            ResourceMetadata {
                uri: competitions_uri(circuit),
                description: format!("Id and name of every {circuit} competition"),
            },
            handler,
        );
    }

    (registry, resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::api::{EndpointCatalog, FeedClient};
    use crate::data_fetcher::cache::DiskCache;
    use serde_json::json;
    use tempfile::tempdir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn registries(base_url: &str, cache_dir: &std::path::Path) -> (ToolRegistry, ResourceRegistry) {
        let client = FeedClient::new(
            create_test_http_client(),
            base_url,
            EndpointCatalog::default(),
            DiskCache::new(cache_dir),
        );
        register_all(Arc::new(CricketTools::new(client)))
    }

    #[test]
    fn test_register_all_names() {
        let temp_dir = tempdir().unwrap();
        let (tools, resources) = registries("http://127.0.0.1:9", temp_dir.path());

        let names: Vec<_> = tools.list().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "get_competitions",
                "get_live_tournaments",
                "get_match_summary",
                "get_tournament_details",
                "get_tournament_schedule",
                "get_tournament_standings",
                "search_competitions",
            ]
        );

        let uris: Vec<_> = resources.list().iter().map(|m| m.uri.clone()).collect();
        assert_eq!(
            uris,
            vec!["bcci://competitions/domestic", "bcci://competitions/international"]
        );
    }

    #[test]
    fn test_metadata_serializes_param_kinds() {
        let temp_dir = tempdir().unwrap();
        let (tools, _) = registries("http://127.0.0.1:9", temp_dir.path());
        let schedule = tools
            .list()
            .into_iter()
            .find(|m| m.name == "get_tournament_schedule")
            .unwrap();
        let value = serde_json::to_value(schedule).unwrap();
        assert_eq!(
            value["params"][0],
            json!({"name": "competition_id", "kind": "integer", "required": true})
        );
        assert_eq!(
            value["params"][2]["kind"],
            json!({"enum": ["upcoming", "live", "post"]})
        );
    }

    #[tokio::test]
    async fn test_unknown_tool_and_resource() {
        let temp_dir = tempdir().unwrap();
        let (tools, resources) = registries("http://127.0.0.1:9", temp_dir.path());

        let err = tools.call("get_weather", json!({})).await.unwrap_err();
        assert!(matches!(err, AppError::ToolNotFound { .. }));

        let err = resources.read("bcci://teams").await.unwrap_err();
        assert!(matches!(err, AppError::ResourceNotFound { .. }));
    }

    #[tokio::test]
    async fn test_bad_arguments_fail_before_io() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&server)
            .await;
        let temp_dir = tempdir().unwrap();
        let (tools, _) = registries(&server.uri(), temp_dir.path());

        for (name, args) in [
            ("get_tournament_standings", json!({})),
            ("get_match_summary", json!({"match_id": 1, "innings": 5})),
            ("get_tournament_schedule", json!({"competition_id": 1, "match_status": "done"})),
        ] {
            let err = tools.call(name, args).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument(_)), "{name}");
        }
    }

    #[tokio::test]
    async fn test_call_dispatches_with_decoded_arguments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feeds-international/scoringfeeds/236-matchschedule.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"MatchSchedule({"Matchsummary":[{"MatchStatus":"Upcoming"},{"MatchStatus":"Post"}]});"#,
            ))
            .mount(&server)
            .await;
        let temp_dir = tempdir().unwrap();
        let (tools, _) = registries(&server.uri(), temp_dir.path());

        let result = tools
            .call(
                "get_tournament_schedule",
                json!({"competition_id": 236, "circuit": "international", "match_status": "upcoming"}),
            )
            .await
            .unwrap();
        assert_eq!(result, json!([{"MatchStatus": "Upcoming"}]));
    }
}
