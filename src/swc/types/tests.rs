//! Unit tests for SWC record types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_league_deserialization_with_teams() {
        let json = json!({
            "league_id": 5001,
            "league_name": "Pigskin Prodigal Fantasy League",
            "scoring_type": "PPR",
            "last_changed_date": "2024-04-18",
            "teams": [
                {
                    "league_id": 5001,
                    "team_id": 1,
                    "team_name": "Jamie's Jammers",
                    "last_changed_date": "2024-04-18"
                }
            ]
        });

        let league: League = serde_json::from_value(json).unwrap();
        assert_eq!(league.league_id, LeagueId::new(5001));
        assert_eq!(league.scoring_type, "PPR");
        assert_eq!(
            league.last_changed_date,
            NaiveDate::from_ymd_opt(2024, 4, 18).unwrap()
        );
        assert_eq!(league.teams.len(), 1);
        assert_eq!(league.teams[0].team_id, TeamId::new(1));
    }

    #[test]
    fn test_league_teams_default_to_empty() {
        let json = json!({
            "league_id": 5002,
            "league_name": "Recurring Champions League",
            "scoring_type": "Half-PPR",
            "last_changed_date": "2024-04-18"
        });

        let league: League = serde_json::from_value(json).unwrap();
        assert!(league.teams.is_empty());
    }

    #[test]
    fn test_league_missing_required_field_fails() {
        let json = json!({
            "league_id": 5003,
            "scoring_type": "PPR",
            "last_changed_date": "2024-04-18"
        });

        let err = serde_json::from_value::<League>(json).unwrap_err();
        assert!(err.to_string().contains("league_name"));
    }

    #[test]
    fn test_player_with_performances() {
        let json = json!({
            "player_id": 1001,
            "gsis_id": "00-0023459",
            "first_name": "Aaron",
            "last_name": "Rodgers",
            "position": "QB",
            "last_changed_date": "2024-04-18",
            "performances": [
                {
                    "performance_id": 2501,
                    "player_id": 1001,
                    "week_number": "202301",
                    "fantasy_points": 20.88,
                    "last_changed_date": "2024-04-18"
                }
            ]
        });

        let player: Player = serde_json::from_value(json).unwrap();
        assert_eq!(player.player_id, PlayerId::new(1001));
        assert_eq!(player.performances.len(), 1);
        assert_eq!(player.performances[0].week_number, "202301");
        assert_eq!(player.performances[0].fantasy_points, 20.88);
    }

    #[test]
    fn test_team_with_players() {
        let json = json!({
            "league_id": 5001,
            "team_id": 1,
            "team_name": "Jamie's Jammers",
            "last_changed_date": "2024-04-18",
            "players": [
                {
                    "player_id": 1001,
                    "gsis_id": "00-0023459",
                    "first_name": "Aaron",
                    "last_name": "Rodgers",
                    "position": "QB",
                    "last_changed_date": "2024-04-18"
                }
            ]
        });

        let team: Team = serde_json::from_value(json).unwrap();
        assert_eq!(team.players.len(), 1);
        assert_eq!(team.players[0].last_name, "Rodgers");
    }

    #[test]
    fn test_performance_rejects_bad_date() {
        let json = json!({
            "performance_id": 2501,
            "player_id": 1001,
            "week_number": "202301",
            "fantasy_points": 20.88,
            "last_changed_date": "last tuesday"
        });

        assert!(serde_json::from_value::<Performance>(json).is_err());
    }

    #[test]
    fn test_performance_ids_are_unsigned() {
        let json = json!({
            "performance_id": -1,
            "player_id": 1001,
            "week_number": "202301",
            "fantasy_points": 20.88,
            "last_changed_date": "2024-04-18"
        });
        assert!(serde_json::from_value::<Performance>(json).is_err());

        let json = json!({
            "performance_id": 3_000_000_000u64,
            "player_id": 1001,
            "week_number": "202301",
            "fantasy_points": 20.88,
            "last_changed_date": "2024-04-18"
        });
        let performance: Performance = serde_json::from_value(json).unwrap();
        assert_eq!(performance.performance_id, 3_000_000_000);
    }

    #[test]
    fn test_counts_serialization() {
        let counts = Counts {
            league_count: 5,
            team_count: 20,
            player_count: 1018,
        };

        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["league_count"], 5);
        assert_eq!(json["team_count"], 20);
        assert_eq!(json["player_count"], 1018);
    }
}
