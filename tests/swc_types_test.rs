//! Unit tests for SWC record types through the public API

use serde_json::json;
use swc_sdk::{Counts, League, Performance, Player, PlayerId, Team};

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_league_list_deserialization() {
        let json = json!([
            {
                "league_id": 5001,
                "league_name": "Pigskin Prodigal Fantasy League",
                "scoring_type": "PPR",
                "last_changed_date": "2024-04-18",
                "teams": []
            },
            {
                "league_id": 5002,
                "league_name": "Recurring Champions League",
                "scoring_type": "Half-PPR",
                "last_changed_date": "2024-04-18",
                "teams": []
            }
        ]);

        let leagues: Vec<League> = serde_json::from_value(json).unwrap();
        assert_eq!(leagues.len(), 2);
        assert_eq!(leagues[1].league_name, "Recurring Champions League");
    }

    #[test]
    fn test_player_serialization_keeps_snake_case_keys() {
        let player: Player = serde_json::from_value(json!({
            "player_id": 1001,
            "gsis_id": "00-0023459",
            "first_name": "Aaron",
            "last_name": "Rodgers",
            "position": "QB",
            "last_changed_date": "2024-04-18"
        }))
        .unwrap();

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["player_id"], 1001);
        assert_eq!(value["last_changed_date"], "2024-04-18");
        assert_eq!(value["performances"], json!([]));
    }

    #[test]
    fn test_performance_fields() {
        let performance: Performance = serde_json::from_value(json!({
            "performance_id": 2501,
            "player_id": 1001,
            "week_number": "202301",
            "fantasy_points": 20.88,
            "last_changed_date": "2024-04-18"
        }))
        .unwrap();

        assert_eq!(performance.player_id, PlayerId::new(1001));
        assert_eq!(performance.fantasy_points, 20.88);
    }

    #[test]
    fn test_team_missing_name_fails() {
        let result = serde_json::from_value::<Team>(json!({
            "league_id": 5001,
            "team_id": 1,
            "last_changed_date": "2024-04-18"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_counts_reject_negative_values() {
        let result = serde_json::from_value::<Counts>(json!({
            "league_count": -1,
            "team_count": 20,
            "player_count": 1018
        }));

        assert!(result.is_err());
    }
}
