//! Pagination and filter parameters for the list endpoints.
//!
//! Every optional filter that is left as `None` is omitted from the query
//! string entirely.

use chrono::NaiveDate;

use crate::{
    cli::types::LeagueId,
    error::{Result, SwcError},
};

/// Query parameter name paired with a value that may be absent.
pub type QueryParam = (&'static str, Option<String>);

pub const DEFAULT_SKIP: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset pagination shared by every list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: u32,
    limit: u32,
}

impl Page {
    /// Fails when `limit` is zero.
    pub fn new(skip: u32, limit: u32) -> Result<Self> {
        if limit == 0 {
            return Err(SwcError::invalid_argument("limit must be greater than zero"));
        }
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    fn params(&self) -> [QueryParam; 2] {
        [
            ("skip", Some(self.skip.to_string())),
            ("limit", Some(self.limit.to_string())),
        ]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn date_param(date: Option<NaiveDate>) -> QueryParam {
    (
        "minimum_last_changed_date",
        date.map(|d| d.format("%Y-%m-%d").to_string()),
    )
}

/// Filters for `/v0/leagues/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueQuery {
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub league_name: Option<String>,
}

impl LeagueQuery {
    pub fn to_params(&self, page: Page) -> Vec<QueryParam> {
        let mut params = page.params().to_vec();
        params.push(date_param(self.minimum_last_changed_date));
        params.push(("league_name", self.league_name.clone()));
        params
    }
}

/// Filters for `/v0/players/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PlayerQuery {
    pub fn to_params(&self, page: Page) -> Vec<QueryParam> {
        let mut params = page.params().to_vec();
        params.push(date_param(self.minimum_last_changed_date));
        params.push(("first_name", self.first_name.clone()));
        params.push(("last_name", self.last_name.clone()));
        params
    }
}

/// Filters for `/v0/performances/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceQuery {
    pub minimum_last_changed_date: Option<NaiveDate>,
}

impl PerformanceQuery {
    pub fn to_params(&self, page: Page) -> Vec<QueryParam> {
        let mut params = page.params().to_vec();
        params.push(date_param(self.minimum_last_changed_date));
        params
    }
}

/// Filters for `/v0/teams/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamQuery {
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub team_name: Option<String>,
    pub league_id: Option<LeagueId>,
}

impl TeamQuery {
    pub fn to_params(&self, page: Page) -> Vec<QueryParam> {
        let mut params = page.params().to_vec();
        params.push(date_param(self.minimum_last_changed_date));
        params.push(("team_name", self.team_name.clone()));
        params.push(("league_id", self.league_id.map(|id| id.to_string())));
        params
    }
}

/// Drop every parameter whose value is absent.
pub fn present_params(params: &[QueryParam]) -> Vec<(&'static str, String)> {
    params
        .iter()
        .filter_map(|(key, value)| value.clone().map(|v| (*key, v)))
        .collect()
}
