//! Conference-feed adapter for the league data backup.
//!
//! Payload shape: flat per-conference JSON arrays under
//! `league.standard.conference.{east,west}`. Win/loss counts arrive as
//! strings under `win`/`loss`, or abbreviated as `w`/`l` in older dumps;
//! team names as `teamSitesOnly.teamNickname` or a plain `name` field.

use super::{ensure_nonempty, parse_json, stat_u32, RawTeamRow, StandingsAdapter};
use crate::error::PipelineError;
use serde_json::Value;

pub struct ConferenceFeedAdapter;

impl StandingsAdapter for ConferenceFeedAdapter {
    fn name(&self) -> &'static str {
        "conference_feed"
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawTeamRow>, PipelineError> {
        let data = parse_json(self.name(), payload)?;

        let conference = &data["league"]["standard"]["conference"];
        if !conference.is_object() {
            return Err(PipelineError::PayloadFormat {
                adapter: self.name(),
                detail: "missing league.standard.conference".to_string(),
            });
        }

        let mut rows = Vec::new();
        for side in ["east", "west"] {
            if let Some(teams) = conference[side].as_array() {
                for team in teams {
                    if let Some(row) = parse_team(team) {
                        rows.push(row);
                    }
                }
            }
        }

        ensure_nonempty(self.name(), rows)
    }
}

fn parse_team(team: &Value) -> Option<RawTeamRow> {
    let name = team["teamSitesOnly"]["teamNickname"]
        .as_str()
        .or_else(|| team["name"].as_str())?;
    let wins = first_stat(team, &["win", "wins", "w"])?;
    let losses = first_stat(team, &["loss", "losses", "l"])?;
    Some(RawTeamRow {
        name: name.to_string(),
        wins,
        losses,
    })
}

fn first_stat(team: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|k| stat_u32(&team[*k]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(east: Value, west: Value) -> String {
        json!({
            "league": { "standard": { "conference": { "east": east, "west": west } } }
        })
        .to_string()
    }

    #[test]
    fn test_extract_nickname_and_string_stats() {
        let payload = feed(
            json!([
                { "teamSitesOnly": { "teamNickname": "Celtics" }, "win": "58", "loss": "24", "winPct": "0.707" },
                { "teamSitesOnly": { "teamNickname": "Knicks" }, "win": "50", "loss": "32", "winPct": "0.610" },
            ]),
            json!([
                { "teamSitesOnly": { "teamNickname": "Thunder" }, "win": "57", "loss": "25", "winPct": "0.695" },
            ]),
        );

        let rows = ConferenceFeedAdapter.extract(&payload).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            RawTeamRow {
                name: "Celtics".to_string(),
                wins: 58,
                losses: 24
            }
        );
        assert_eq!(rows[2].name, "Thunder");
    }

    #[test]
    fn test_extract_abbreviated_fields() {
        let payload = feed(
            json!([ { "name": "Bucks", "w": 49, "l": 33 } ]),
            json!([ { "name": "Suns", "w": 45, "l": 37 } ]),
        );

        let rows = ConferenceFeedAdapter.extract(&payload).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].wins, 49);
        assert_eq!(rows[1].name, "Suns");
    }

    #[test]
    fn test_missing_conference_node_is_format_error() {
        let err = ConferenceFeedAdapter
            .extract(r#"{"league": {"standard": {}}}"#)
            .unwrap_err();
        assert!(matches!(err, PipelineError::PayloadFormat { .. }));
    }

    #[test]
    fn test_teams_without_stats_are_skipped() {
        let payload = feed(
            json!([ { "teamSitesOnly": { "teamNickname": "Hawks" } } ]),
            json!([]),
        );
        let err = ConferenceFeedAdapter.extract(&payload).unwrap_err();
        assert!(matches!(err, PipelineError::ExtractionEmpty { .. }));
    }
}
