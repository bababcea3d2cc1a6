//! HTTP client for the SWC API.

use std::future::Future;

use backoff::backoff::Backoff as _;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    cli::types::{LeagueId, PlayerId},
    config::SwcConfig,
    error::{Result, SwcError},
    swc::{
        bulk::BulkFiles,
        request::{
            present_params, LeagueQuery, Page, PerformanceQuery, PlayerQuery, QueryParam,
            TeamQuery,
        },
        retry::RetryPolicy,
        types::{Counts, League, Performance, Player, Team},
    },
};


pub const HEALTH_CHECK_ENDPOINT: &str = "/";
pub const LEAGUES_ENDPOINT: &str = "/v0/leagues/";
pub const PLAYERS_ENDPOINT: &str = "/v0/players/";
pub const PERFORMANCES_ENDPOINT: &str = "/v0/performances/";
pub const TEAMS_ENDPOINT: &str = "/v0/teams/";
pub const COUNTS_ENDPOINT: &str = "/v0/counts/";

const USER_AGENT: &str = concat!("swc-sdk/", env!("CARGO_PKG_VERSION"));

/// Typed access to the SWC API.
///
/// Connections are not kept alive between calls: each call opens its own
/// connection and drops it when the response is consumed.
#[derive(Debug, Clone)]
pub struct SwcClient {
    config: SwcConfig,
    http: Client,
    retry: Option<RetryPolicy>,
    bulk_files: BulkFiles,
}

impl SwcClient {
    /// Build a client whose retry behavior follows the config's backoff settings.
    pub fn new(config: SwcConfig) -> Result<Self> {
        let retry = RetryPolicy::from_config(&config);
        Self::with_retry_policy(config, retry)
    }

    /// Build a client with an explicit retry policy; `None` sends each request once.
    pub fn with_retry_policy(config: SwcConfig, retry: Option<RetryPolicy>) -> Result<Self> {
        Url::parse(config.base_url()).map_err(|e| {
            SwcError::configuration(format!("base URL is not a valid URL: {e}"))
        })?;

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!(config = %config, retry = retry.is_some(), "created SWC client");

        Ok(Self {
            bulk_files: BulkFiles::new(config.bulk_file_format()),
            config,
            http,
            retry,
        })
    }

    pub fn config(&self) -> &SwcConfig {
        &self.config
    }

    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry.as_ref()
    }

    pub fn bulk_files(&self) -> &BulkFiles {
        &self.bulk_files
    }

    /// File name of a bulk data set (`players`, `leagues`, `performances`, `team_players`).
    pub fn bulk_file_name(&self, name: &str) -> Option<&str> {
        self.bulk_files.get(name)
    }

    /// GET `base_url + endpoint`, retrying per the client's policy.
    ///
    /// Parameters whose value is `None` are never sent. The returned response
    /// always has a success status.
    pub async fn call(&self, endpoint: &str, params: &[QueryParam]) -> Result<Response> {
        let url = self.endpoint_url(endpoint)?;
        let query = present_params(params);
        let (url, query) = (&url, query.as_slice());

        self.with_retry(endpoint, move || self.send_once(url, endpoint, query))
            .await
    }

    /// Like [`call`](Self::call), but the body is read inside each attempt so
    /// a connection dropped mid-body is retried too.
    async fn fetch_text(&self, endpoint: &str, params: &[QueryParam]) -> Result<String> {
        let url = self.endpoint_url(endpoint)?;
        let query = present_params(params);
        let (url, query) = (&url, query.as_slice());

        self.with_retry(endpoint, move || async move {
            let response = self.send_once(url, endpoint, query).await?;
            response.text().await.map_err(|e| {
                tracing::error!(endpoint, error = %e, "failed to read SWC API response body");
                SwcError::from(e)
            })
        })
        .await
    }

    /// Run `attempt` until it succeeds, fails with a non-retryable error, or
    /// the policy's time budget is spent.
    async fn with_retry<T, F, Fut>(&self, endpoint: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let Some(policy) = &self.retry else {
            return attempt().await;
        };

        let mut backoff = policy.backoff();
        loop {
            match attempt().await {
                Ok(value) => return Ok(value),
                Err(e) if RetryPolicy::is_retryable(&e) => match backoff.next_backoff() {
                    Some(delay) => {
                        tracing::warn!(endpoint, ?delay, "retrying SWC API call");
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        tracing::error!(endpoint, error = %e, "giving up after retry budget was spent");
                        return Err(e);
                    }
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Liveness check against `/`. Returns the raw response.
    pub async fn get_health_check(&self) -> Result<Response> {
        self.call(HEALTH_CHECK_ENDPOINT, &[]).await
    }

    pub async fn list_leagues(&self, page: Page, query: &LeagueQuery) -> Result<Vec<League>> {
        self.get_json(LEAGUES_ENDPOINT, &query.to_params(page)).await
    }

    pub async fn get_league_by_id(&self, league_id: LeagueId) -> Result<League> {
        self.get_json(&format!("{LEAGUES_ENDPOINT}{league_id}"), &[])
            .await
    }

    pub async fn list_players(&self, page: Page, query: &PlayerQuery) -> Result<Vec<Player>> {
        self.get_json(PLAYERS_ENDPOINT, &query.to_params(page)).await
    }

    pub async fn get_player_by_id(&self, player_id: PlayerId) -> Result<Player> {
        self.get_json(&format!("{PLAYERS_ENDPOINT}{player_id}"), &[])
            .await
    }

    pub async fn list_performances(
        &self,
        page: Page,
        query: &PerformanceQuery,
    ) -> Result<Vec<Performance>> {
        self.get_json(PERFORMANCES_ENDPOINT, &query.to_params(page))
            .await
    }

    pub async fn list_teams(&self, page: Page, query: &TeamQuery) -> Result<Vec<Team>> {
        self.get_json(TEAMS_ENDPOINT, &query.to_params(page)).await
    }

    pub async fn get_counts(&self) -> Result<Counts> {
        self.get_json(COUNTS_ENDPOINT, &[]).await
    }

    /// Call an endpoint and decode the whole body; one bad element fails the call.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: &[QueryParam]) -> Result<T> {
        let body = self.fetch_text(endpoint, params).await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(endpoint, error = %e, "SWC API response did not match the expected schema");
            SwcError::from(e)
        })
    }

    async fn send_once(
        &self,
        url: &Url,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<Response> {
        tracing::debug!(
            base_url = %self.config.base_url(),
            endpoint,
            params = ?query,
            "calling SWC API"
        );

        let response = match self.http.get(url.clone()).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(endpoint, error = %e, "SWC API request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), endpoint, body = %body, "SWC API returned an error status");
            return Err(SwcError::HttpStatus {
                status,
                endpoint: endpoint.to_string(),
                body,
            });
        }

        Ok(response)
    }

    /// Endpoints are appended to the base URL, so a base path such as
    /// `https://host/api` is kept.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.config.base_url().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }
}
