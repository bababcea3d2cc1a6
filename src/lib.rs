//! SWC Fantasy Football SDK
//!
//! A typed Rust client for the SportsWorldCentral (SWC) fantasy football API:
//! leagues, teams, players, weekly performances and record counts.
//!
//! ## Features
//!
//! - **Typed endpoints**: every list call decodes into record structs, all or nothing
//! - **Retry with backoff**: transient failures are retried with exponential
//!   backoff and jitter inside a configurable time budget
//! - **Bulk file names**: CSV or Parquet names for the bulk data snapshots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swc_sdk::{LeagueQuery, Page, SwcClient, SwcConfig};
//!
//! # async fn example() -> swc_sdk::Result<()> {
//! let config = SwcConfig::new("http://localhost:8000")?;
//! let client = SwcClient::new(config)?;
//!
//! let health = client.get_health_check().await?;
//! assert!(health.status().is_success());
//!
//! let leagues = client
//!     .list_leagues(Page::default(), &LeagueQuery::default())
//!     .await?;
//! for league in leagues {
//!     println!("{} ({})", league.league_name, league.scoring_type);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The `swc` binary reads the base URL from the environment (or a `.env` file)
//! when `--base-url` is not given:
//! ```bash
//! export SWC_API_BASE_URL=http://localhost:8000
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod swc;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, TeamId};
pub use config::{resolve_base_url, BulkFileFormat, SwcConfig, BASE_URL_ENV_VAR};
pub use error::{Result, SwcError};
pub use swc::types::{Counts, League, Performance, Player, PlayerBase, Team, TeamBase};
pub use swc::{
    LeagueQuery, Page, PerformanceQuery, PlayerQuery, RetryPolicy, SwcClient, TeamQuery,
};
