//! Shared in-process view of the latest standings and scores.

use crate::scoring::PlayerScore;
use crate::types::StandingsSnapshot;
use parking_lot::RwLock;
use std::sync::Arc;

pub type SharedState = Arc<RwLock<AppState>>;

/// Latest good snapshot plus derived scores. A failed refresh records the
/// error but never clears the snapshot; stale standings beat none.
#[derive(Debug, Default)]
pub struct AppState {
    pub standings: Option<StandingsSnapshot>,
    pub scores: Vec<PlayerScore>,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn shared() -> SharedState {
        Arc::new(RwLock::new(AppState::default()))
    }

    pub fn apply_snapshot(&mut self, snapshot: StandingsSnapshot, scores: Vec<PlayerScore>) {
        self.standings = Some(snapshot);
        self.scores = scores;
        self.last_error = None;
    }

    pub fn record_failure(&mut self, error: String) {
        self.last_error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Conference, ConferenceStandings};
    use chrono::Utc;

    fn snapshot() -> StandingsSnapshot {
        StandingsSnapshot {
            east: ConferenceStandings {
                conference: Conference::East,
                teams: Vec::new(),
            },
            west: ConferenceStandings {
                conference: Conference::West,
                teams: Vec::new(),
            },
            source: "test".to_string(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_failure_keeps_snapshot() {
        let mut state = AppState::default();
        state.apply_snapshot(snapshot(), Vec::new());
        state.record_failure("network down".to_string());
        assert!(state.standings.is_some());
        assert_eq!(state.last_error.as_deref(), Some("network down"));
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = AppState::default();
        state.record_failure("network down".to_string());
        state.apply_snapshot(snapshot(), Vec::new());
        assert!(state.last_error.is_none());
    }
}
