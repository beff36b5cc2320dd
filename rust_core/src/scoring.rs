//! Prediction-accuracy scoring.
//!
//! Pure functions of (prediction list, ranked standings): identical inputs
//! always yield identical reports. Per-team accuracy is linear in rank
//! distance over the fixed 0-14 range; the conference denominator stays
//! pinned at 15, so an unresolved team silently caps achievable accuracy.

use crate::predictions::PredictionSet;
use crate::types::{ConferenceStandings, StandingsSnapshot, MAX_RANK_DISTANCE, TEAMS_PER_CONFERENCE};
use serde::Serialize;

/// Scoring detail for one matched team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScoreDetail {
    pub team: String,
    pub predicted_rank: u32,
    pub actual_rank: u32,
    pub distance: u32,
    pub accuracy: f64,
}

/// One conference's accuracy plus its per-team breakdown. Teams absent
/// from the actual table are skipped in the detail list but still divide
/// into the fixed denominator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConferenceScore {
    pub accuracy: f64,
    pub details: Vec<TeamScoreDetail>,
}

/// Full report for one predictor. Recomputed wholesale whenever standings
/// or predictions change; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerScore {
    pub player: String,
    pub east: ConferenceScore,
    pub west: ConferenceScore,
    pub combined: f64,
}

/// Score one predictor's ordered conference list against the actual table.
pub fn score_conference(predicted: &[String], actual: &ConferenceStandings) -> ConferenceScore {
    let mut total = 0.0;
    let mut details = Vec::with_capacity(predicted.len());

    for (idx, team) in predicted.iter().enumerate() {
        let predicted_rank = idx as u32 + 1;
        let Some(actual_rank) = actual.rank_of(team) else {
            continue;
        };
        let distance = predicted_rank.abs_diff(actual_rank).min(MAX_RANK_DISTANCE);
        let accuracy =
            f64::from(MAX_RANK_DISTANCE - distance) / f64::from(MAX_RANK_DISTANCE) * 100.0;
        total += accuracy;
        details.push(TeamScoreDetail {
            team: team.clone(),
            predicted_rank,
            actual_rank,
            distance,
            accuracy,
        });
    }

    ConferenceScore {
        accuracy: total / TEAMS_PER_CONFERENCE as f64,
        details,
    }
}

/// Score every predictor against the current snapshot.
pub fn score_all(predictions: &[PredictionSet], snapshot: &StandingsSnapshot) -> Vec<PlayerScore> {
    predictions
        .iter()
        .map(|set| {
            let east = score_conference(&set.east, &snapshot.east);
            let west = score_conference(&set.west, &snapshot.west);
            let combined = (east.accuracy + west.accuracy) / 2.0;
            PlayerScore {
                player: set.player.clone(),
                east,
                west,
                combined,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TeamRegistry;
    use crate::types::{Conference, RankedTeam};

    fn east_table(names: &[&str]) -> ConferenceStandings {
        ConferenceStandings {
            conference: Conference::East,
            teams: names
                .iter()
                .enumerate()
                .map(|(i, name)| RankedTeam {
                    rank: i as u32 + 1,
                    name: name.to_string(),
                    wins: 60 - i as u32 * 2,
                    losses: 22 + i as u32 * 2,
                })
                .collect(),
        }
    }

    fn east_names() -> Vec<&'static str> {
        TeamRegistry::load()
            .unwrap()
            .conference_teams(Conference::East)
            .map(|e| e.canonical)
            .collect()
    }

    #[test]
    fn test_perfect_prediction_scores_100() {
        let names = east_names();
        let actual = east_table(&names);
        let predicted: Vec<String> = names.iter().map(|s| s.to_string()).collect();

        let score = score_conference(&predicted, &actual);
        assert!((score.accuracy - 100.0).abs() < 1e-9);
        assert_eq!(score.details.len(), 15);
        assert!(score.details.iter().all(|d| d.distance == 0));
    }

    #[test]
    fn test_maximum_distance_scores_zero_for_team() {
        let names = east_names();
        let actual = east_table(&names);

        // Predict the actual 15th team at rank 1.
        let mut predicted: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        predicted.rotate_right(1);

        let score = score_conference(&predicted, &actual);
        let first = &score.details[0];
        assert_eq!(first.predicted_rank, 1);
        assert_eq!(first.actual_rank, 15);
        assert_eq!(first.distance, 14);
        assert_eq!(first.accuracy, 0.0);
    }

    #[test]
    fn test_unmatched_team_divides_into_fixed_denominator() {
        let names = east_names();
        let actual = east_table(&names);

        let mut predicted: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        predicted[14] = "Seattle SuperSonics".to_string();

        let score = score_conference(&predicted, &actual);
        // 14 perfect teams over a denominator of 15.
        assert!((score.accuracy - 14.0 * 100.0 / 15.0).abs() < 1e-9);
        assert_eq!(score.details.len(), 14);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let names = east_names();
        let actual = east_table(&names);
        let mut predicted: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        predicted.swap(2, 9);

        let a = score_conference(&predicted, &actual);
        let b = score_conference(&predicted, &actual);
        assert_eq!(a, b);
    }

    #[test]
    fn test_one_slot_miss_accuracy() {
        let names = east_names();
        let actual = east_table(&names);
        let mut predicted: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        predicted.swap(0, 1);

        let score = score_conference(&predicted, &actual);
        let expected_per_team = (14.0 - 1.0) / 14.0 * 100.0;
        assert!((score.details[0].accuracy - expected_per_team).abs() < 1e-9);
        assert!((score.details[1].accuracy - expected_per_team).abs() < 1e-9);
    }
}
