//! Player and performance command implementations

use crate::{
    cli::PageArgs,
    swc::{PerformanceQuery, PlayerQuery, SwcClient},
    PlayerId, Result,
};

use super::common::print_json;

/// List players matching the name filters
pub async fn handle_players(
    client: &SwcClient,
    page: &PageArgs,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    let query = PlayerQuery {
        minimum_last_changed_date: page.minimum_last_changed_date,
        first_name,
        last_name,
    };
    let players = client.list_players(page.page()?, &query).await?;
    tracing::info!(count = players.len(), "fetched players");
    print_json(&players)
}

/// Show one player with weekly performances
pub async fn handle_player(client: &SwcClient, player_id: PlayerId) -> Result<()> {
    let player = client.get_player_by_id(player_id).await?;
    print_json(&player)
}

pub async fn handle_performances(client: &SwcClient, page: &PageArgs) -> Result<()> {
    let query = PerformanceQuery {
        minimum_last_changed_date: page.minimum_last_changed_date,
    };
    let performances = client.list_performances(page.page()?, &query).await?;
    tracing::info!(count = performances.len(), "fetched performances");
    print_json(&performances)
}
