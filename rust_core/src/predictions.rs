//! Pre-recorded rank predictions, one fixed ordered list per conference
//! per predictor. This is configuration: loaded once, validated against
//! the registry, never mutated at runtime.

use crate::error::PipelineError;
use crate::registry::TeamRegistry;
use crate::types::{Conference, TEAMS_PER_CONFERENCE};
use rustc_hash::FxHashSet;

/// Static prediction table entry. Position in each list is the predicted
/// rank minus one.
pub struct PredictionTable {
    pub player: &'static str,
    pub east: [&'static str; TEAMS_PER_CONFERENCE],
    pub west: [&'static str; TEAMS_PER_CONFERENCE],
}

pub static PREDICTION_TABLE: &[PredictionTable] = &[
    PredictionTable {
        player: "aaron",
        east: [
            "Cleveland Cavaliers",
            "New York Knicks",
            "Orlando Magic",
            "Atlanta Hawks",
            "Milwaukee Bucks",
            "Detroit Pistons",
            "Boston Celtics",
            "Miami Heat",
            "Philadelphia 76ers",
            "Toronto Raptors",
            "Charlotte Hornets",
            "Indiana Pacers",
            "Chicago Bulls",
            "Brooklyn Nets",
            "Washington Wizards",
        ],
        west: [
            "Oklahoma City Thunder",
            "Houston Rockets",
            "Denver Nuggets",
            "Minnesota Timberwolves",
            "Los Angeles Lakers",
            "Golden State Warriors",
            "Los Angeles Clippers",
            "Dallas Mavericks",
            "Memphis Grizzlies",
            "San Antonio Spurs",
            "Phoenix Suns",
            "New Orleans Pelicans",
            "Sacramento Kings",
            "Utah Jazz",
            "Portland Trail Blazers",
        ],
    },
    PredictionTable {
        player: "austin",
        east: [
            "Cleveland Cavaliers",
            "Orlando Magic",
            "New York Knicks",
            "Boston Celtics",
            "Detroit Pistons",
            "Milwaukee Bucks",
            "Atlanta Hawks",
            "Philadelphia 76ers",
            "Toronto Raptors",
            "Indiana Pacers",
            "Miami Heat",
            "Chicago Bulls",
            "Charlotte Hornets",
            "Washington Wizards",
            "Brooklyn Nets",
        ],
        west: [
            "Oklahoma City Thunder",
            "Houston Rockets",
            "Dallas Mavericks",
            "Denver Nuggets",
            "Minnesota Timberwolves",
            "New Orleans Pelicans",
            "San Antonio Spurs",
            "Los Angeles Clippers",
            "Golden State Warriors",
            "Memphis Grizzlies",
            "Los Angeles Lakers",
            "Portland Trail Blazers",
            "Phoenix Suns",
            "Sacramento Kings",
            "Utah Jazz",
        ],
    },
    PredictionTable {
        player: "paul",
        east: [
            "New York Knicks",
            "Cleveland Cavaliers",
            "Orlando Magic",
            "Atlanta Hawks",
            "Indiana Pacers",
            "Philadelphia 76ers",
            "Detroit Pistons",
            "Toronto Raptors",
            "Miami Heat",
            "Brooklyn Nets",
            "Milwaukee Bucks",
            "Chicago Bulls",
            "Boston Celtics",
            "Washington Wizards",
            "Charlotte Hornets",
        ],
        west: [
            "Oklahoma City Thunder",
            "Denver Nuggets",
            "Minnesota Timberwolves",
            "Los Angeles Clippers",
            "Houston Rockets",
            "Dallas Mavericks",
            "Golden State Warriors",
            "San Antonio Spurs",
            "Los Angeles Lakers",
            "Memphis Grizzlies",
            "Portland Trail Blazers",
            "Phoenix Suns",
            "Sacramento Kings",
            "New Orleans Pelicans",
            "Utah Jazz",
        ],
    },
];

/// A validated, owned prediction set for one predictor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionSet {
    pub player: String,
    pub east: Vec<String>,
    pub west: Vec<String>,
}

/// Load and validate the static prediction tables against the registry:
/// each conference list must hold fifteen distinct canonical names from
/// that conference. Violations are configuration errors and fatal.
pub fn load_predictions(registry: &TeamRegistry) -> Result<Vec<PredictionSet>, PipelineError> {
    PREDICTION_TABLE
        .iter()
        .map(|table| {
            validate_list(registry, table.player, Conference::East, &table.east)?;
            validate_list(registry, table.player, Conference::West, &table.west)?;
            Ok(PredictionSet {
                player: table.player.to_string(),
                east: table.east.iter().map(|s| s.to_string()).collect(),
                west: table.west.iter().map(|s| s.to_string()).collect(),
            })
        })
        .collect()
}

fn validate_list(
    registry: &TeamRegistry,
    player: &str,
    conference: Conference,
    list: &[&str],
) -> Result<(), PipelineError> {
    let mut seen = FxHashSet::default();
    for name in list {
        if registry.conference_of(name) != Some(conference) {
            return Err(PipelineError::InvalidPrediction {
                player: player.to_string(),
                detail: format!("{name:?} is not a canonical {conference} team"),
            });
        }
        if !seen.insert(*name) {
            return Err(PipelineError::InvalidPrediction {
                player: player.to_string(),
                detail: format!("{name:?} listed twice in the {conference} list"),
            });
        }
    }
    Ok(())
}
