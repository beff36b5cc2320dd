//! Core data model for standings and ranked conference tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed league partition: two conferences of fifteen teams each.
pub const TEAMS_PER_CONFERENCE: usize = 15;

/// Maximum possible rank distance in a 15-team conference (1st to 15th).
pub const MAX_RANK_DISTANCE: u32 = (TEAMS_PER_CONFERENCE as u32) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub const BOTH: [Conference; 2] = [Conference::East, Conference::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "east",
            Conference::West => "west",
        }
    }
}

impl std::fmt::Display for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single team's win/loss record, keyed by canonical name.
/// Created per fetch cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, wins: u32, losses: u32) -> Self {
        Self {
            name: name.into(),
            wins,
            losses,
        }
    }

    /// wins / (wins + losses), or 0.0 for a winless-and-lossless record.
    pub fn win_fraction(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(played)
        }
    }

    pub fn record_display(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// A team record annotated with its dense 1-based conference rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTeam {
    pub rank: u32,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

impl RankedTeam {
    pub fn record_display(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

/// Ordered, ranked table for one conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceStandings {
    pub conference: Conference,
    pub teams: Vec<RankedTeam>,
}

impl ConferenceStandings {
    /// Actual rank lookup by canonical name.
    pub fn rank_of(&self, canonical: &str) -> Option<u32> {
        self.teams.iter().find(|t| t.name == canonical).map(|t| t.rank)
    }

    /// A fully-resolved table has exactly fifteen entries. Partial tables
    /// are permitted transiently but flagged by this accessor.
    pub fn is_complete(&self) -> bool {
        self.teams.len() == TEAMS_PER_CONFERENCE
    }
}

/// The "current standings" snapshot: both conference tables plus provenance.
/// Replaced wholesale on each successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsSnapshot {
    pub east: ConferenceStandings,
    pub west: ConferenceStandings,
    /// Which configured source produced this snapshot.
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

impl StandingsSnapshot {
    pub fn conference(&self, conference: Conference) -> &ConferenceStandings {
        match conference {
            Conference::East => &self.east,
            Conference::West => &self.west,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.east.is_complete() && self.west.is_complete()
    }
}
