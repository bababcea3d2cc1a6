//! SWC API client, request parameters, retry policy and record types.

pub mod bulk;
pub mod http;
pub mod request;
pub mod retry;
pub mod types;

pub use http::SwcClient;
pub use request::{LeagueQuery, Page, PerformanceQuery, PlayerQuery, TeamQuery};
pub use retry::RetryPolicy;
