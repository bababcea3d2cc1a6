//! League and team command implementations

use crate::{
    cli::PageArgs,
    swc::{LeagueQuery, SwcClient, TeamQuery},
    LeagueId, Result,
};

use super::common::print_json;

/// List leagues matching the filters
pub async fn handle_leagues(
    client: &SwcClient,
    page: &PageArgs,
    league_name: Option<String>,
) -> Result<()> {
    let query = LeagueQuery {
        minimum_last_changed_date: page.minimum_last_changed_date,
        league_name,
    };
    let leagues = client.list_leagues(page.page()?, &query).await?;
    tracing::info!(count = leagues.len(), "fetched leagues");
    print_json(&leagues)
}

/// Show one league with its teams
pub async fn handle_league(client: &SwcClient, league_id: LeagueId) -> Result<()> {
    let league = client.get_league_by_id(league_id).await?;
    print_json(&league)
}

/// List teams, optionally restricted to one league
pub async fn handle_teams(
    client: &SwcClient,
    page: &PageArgs,
    team_name: Option<String>,
    league_id: Option<LeagueId>,
) -> Result<()> {
    let query = TeamQuery {
        minimum_last_changed_date: page.minimum_last_changed_date,
        team_name,
        league_id,
    };
    let teams = client.list_teams(page.page()?, &query).await?;
    tracing::info!(count = teams.len(), "fetched teams");
    print_json(&teams)
}

/// Show league, team and player totals
pub async fn handle_counts(client: &SwcClient) -> Result<()> {
    let counts = client.get_counts().await?;
    print_json(&counts)
}
