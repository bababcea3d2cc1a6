//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use types::{LeagueId, PlayerId};

use crate::{
    config::BulkFileFormat,
    error::Result,
    swc::request::{DEFAULT_LIMIT, DEFAULT_SKIP},
    swc::Page,
};

/// Pagination arguments shared by the list commands
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Number of records to skip.
    #[clap(long, default_value_t = DEFAULT_SKIP)]
    pub skip: u32,

    /// Maximum number of records to return (must be > 0).
    #[clap(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Only records changed on or after this date (YYYY-MM-DD).
    #[clap(long = "since")]
    pub minimum_last_changed_date: Option<NaiveDate>,
}

impl PageArgs {
    pub fn page(&self) -> Result<Page> {
        Page::new(self.skip, self.limit)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the SWC API is up
    Health,

    /// List leagues
    Leagues {
        #[clap(flatten)]
        page: PageArgs,

        /// Filter by league name.
        #[clap(long, short = 'n')]
        league_name: Option<String>,
    },

    /// Get one league by ID
    League { league_id: LeagueId },

    /// List players
    Players {
        #[clap(flatten)]
        page: PageArgs,

        /// Filter by first name.
        #[clap(long)]
        first_name: Option<String>,

        /// Filter by last name.
        #[clap(long)]
        last_name: Option<String>,
    },

    /// Get one player, with performances, by ID
    Player { player_id: PlayerId },

    /// List weekly fantasy performances
    Performances {
        #[clap(flatten)]
        page: PageArgs,
    },

    /// List teams and their rosters
    Teams {
        #[clap(flatten)]
        page: PageArgs,

        /// Filter by team name.
        #[clap(long, short = 'n')]
        team_name: Option<String>,

        /// Only teams in this league.
        #[clap(long, short)]
        league_id: Option<LeagueId>,
    },

    /// Show league, team and player counts
    Counts,

    /// Print the bulk file names for the configured format
    BulkFiles,
}

#[derive(Debug, Parser)]
#[clap(name = "swc", about = "SportsWorldCentral fantasy football API client")]
pub struct Swc {
    /// API base URL (or set `SWC_API_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Send each request once, without retrying.
    #[clap(long, global = true)]
    pub no_backoff: bool,

    /// Seconds to keep retrying a failed call.
    #[clap(long, global = true)]
    pub backoff_max_time: Option<u64>,

    /// Bulk file format: csv or parquet.
    #[clap(long, global = true)]
    pub bulk_file_format: Option<BulkFileFormat>,

    #[clap(subcommand)]
    pub command: Commands,
}
