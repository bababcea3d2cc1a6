//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use clap::Parser;
use swc_sdk::{
    cli::{Commands, Swc},
    commands::{
        bulk_files::handle_bulk_files,
        common::build_client,
        health_check::handle_health_check,
        league_data::{handle_counts, handle_league, handle_leagues, handle_teams},
        player_data::{handle_performances, handle_player, handle_players},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    let app = Swc::parse();
    let client = build_client(&app)?;

    match app.command {
        Commands::Health => handle_health_check(&client).await?,
        Commands::Leagues { page, league_name } => {
            handle_leagues(&client, &page, league_name).await?
        }
        Commands::League { league_id } => handle_league(&client, league_id).await?,
        Commands::Players {
            page,
            first_name,
            last_name,
        } => handle_players(&client, &page, first_name, last_name).await?,
        Commands::Player { player_id } => handle_player(&client, player_id).await?,
        Commands::Performances { page } => handle_performances(&client, &page).await?,
        Commands::Teams {
            page,
            team_name,
            league_id,
        } => handle_teams(&client, &page, team_name, league_id).await?,
        Commands::Counts => handle_counts(&client).await?,
        Commands::BulkFiles => handle_bulk_files(&client)?,
    }

    Ok(())
}
