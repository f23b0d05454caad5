use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch_feed;
use super::http_client::create_http_client_with_timeout;
use super::urls::{EndpointCatalog, Feed, full_url, resolve_template};
use crate::config::Config;
use crate::constants::innings;
use crate::data_fetcher::cache::{CacheKey, DiskCache};
use crate::data_fetcher::models::Circuit;
use crate::data_fetcher::processors::project_innings;
use crate::error::AppError;

/// Read-through client for the scores feed.
///
/// Owns the HTTP client for its whole lifetime; dropping the `FeedClient`
/// releases pooled connections on every exit path.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    base_url: String,
    endpoints: EndpointCatalog,
    cache: DiskCache,
}

/// Checks an innings index against the 1..=4 range before any I/O.
pub fn validate_innings(innings: u32) -> Result<(), AppError> {
    if (innings::MIN..=innings::MAX).contains(&innings) {
        Ok(())
    } else {
        Err(AppError::invalid_argument(format!(
            "innings must be between {} and {}, got {innings}",
            innings::MIN,
            innings::MAX
        )))
    }
}

impl FeedClient {
    /// Builds a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let endpoints = match &config.international_innings_url {
            Some(template) => EndpointCatalog::default().with_international_innings(template),
            None => EndpointCatalog::default(),
        };
        Ok(Self::new(
            client,
            config.base_url(),
            endpoints,
            DiskCache::new(config.cache_dir_path()),
        ))
    }

    /// Builds a client from explicit parts. The cache directory is injected
    /// here rather than discovered from the environment.
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        endpoints: EndpointCatalog,
        cache: DiskCache,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            endpoints,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &EndpointCatalog {
        &self.endpoints
    }

    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }

    /// Resolves a template against its parameters into a concrete URL.
    /// Absolute templates ignore the base URL.
    pub fn url_for(&self, template: &str, params: &[(&str, &str)]) -> String {
        full_url(&self.base_url, &resolve_template(template, params))
    }

    /// Fetches and unwraps one feed document. Never cached.
    pub async fn fetch(&self, template: &str, params: &[(&str, &str)]) -> Result<Value, AppError> {
        let url = self.url_for(template, params);
        fetch_feed(&self.client, &url).await
    }

    /// Competition catalog of a circuit, read through the disk cache.
    ///
    /// With `use_cache == false` the cached copy is ignored but the fresh
    /// payload is still written back.
    #[instrument(skip(self))]
    pub async fn competitions(&self, circuit: Circuit, use_cache: bool) -> Result<Value, AppError> {
        let key = CacheKey::competitions(circuit);

        if use_cache && let Some(cached) = self.cache.read(&key).await {
            debug!("Using cached {} competitions", circuit);
            return Ok(cached);
        }

        let template = self.endpoints.template(Feed::Competitions, circuit);
        let data = self.fetch(template, &[]).await?;
        self.cache.write(&key, &data).await;
        info!("Fetched {} competitions from feed", circuit);
        Ok(data)
    }

    /// Group standings of a competition
    #[instrument(skip(self))]
    pub async fn standings(&self, competition_id: u64) -> Result<Value, AppError> {
        let id = competition_id.to_string();
        let template = self.endpoints.template(Feed::Standings, Circuit::Domestic);
        self.fetch(template, &[("CompetitionID", &id)]).await
    }

    /// Match schedule of a competition
    #[instrument(skip(self))]
    pub async fn schedule(&self, competition_id: u64, circuit: Circuit) -> Result<Value, AppError> {
        let id = competition_id.to_string();
        let template = self.endpoints.template(Feed::Schedule, circuit);
        self.fetch(template, &[("CompetitionID", &id)]).await
    }

    /// Overall match summary, or a single projected innings when `innings` is given.
    #[instrument(skip(self))]
    pub async fn match_summary(
        &self,
        match_id: u64,
        circuit: Circuit,
        innings: Option<u32>,
    ) -> Result<Value, AppError> {
        match innings {
            Some(innings) => self.innings(match_id, circuit, innings).await,
            None => {
                let id = match_id.to_string();
                let template = self.endpoints.template(Feed::MatchSummary, circuit);
                self.fetch(template, &[("MatchID", &id)]).await
            }
        }
    }

    /// One innings scorecard reduced to its batting, bowling, extras and
    /// fall-of-wickets blocks.
    pub async fn innings(
        &self,
        match_id: u64,
        circuit: Circuit,
        innings: u32,
    ) -> Result<Value, AppError> {
        validate_innings(innings)?;
        let id = match_id.to_string();
        let n = innings.to_string();
        let template = self.endpoints.template(Feed::Innings, circuit);
        let doc = self.fetch(template, &[("MatchID", &id), ("N", &n)]).await?;
        Ok(project_innings(&doc, innings))
    }
}
