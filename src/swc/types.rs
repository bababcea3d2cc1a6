use crate::cli::types::{LeagueId, PlayerId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One player's fantasy score for one week
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Performance {
    pub performance_id: u64,
    pub player_id: PlayerId,
    /// Season and week, e.g. `"202301"`.
    pub week_number: String,
    pub fantasy_points: f64,
    pub last_changed_date: NaiveDate,
}

/// Player without nested performances, as listed on a team roster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerBase {
    pub player_id: PlayerId,
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

/// Player data from the `/v0/players/` endpoints
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

/// Team without its roster, as nested in a league
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamBase {
    pub league_id: LeagueId,
    pub team_id: TeamId,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
}

/// Team data from `/v0/teams/`, including the rostered players
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub league_id: LeagueId,
    pub team_id: TeamId,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub players: Vec<PlayerBase>,
}

/// League data from the `/v0/leagues/` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub teams: Vec<TeamBase>,
}

/// Record totals from `/v0/counts/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Counts {
    pub league_count: u64,
    pub team_count: u64,
    pub player_count: u64,
}
