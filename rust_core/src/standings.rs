//! Standings builder: ranked conference tables from resolved team records.
//!
//! Sort order is win fraction descending, raw wins descending, then stable
//! input order. There is no further tie-break field; two teams with the
//! same fraction and win count keep their arrival order. Known limitation.

use crate::registry::TeamRegistry;
use crate::types::{Conference, ConferenceStandings, RankedTeam, TeamRecord};

/// Build one ranked conference table. With `backfill` set, registry teams
/// missing from `records` are appended as 0-0 placeholders before ranking,
/// guaranteeing a complete fifteen-team table; they sort last, tie-broken
/// by registry order. Backfill is required on the final fallback tier.
pub fn build_conference(
    conference: Conference,
    mut records: Vec<TeamRecord>,
    backfill: bool,
    registry: &TeamRegistry,
) -> ConferenceStandings {
    if backfill {
        for entry in registry.conference_teams(conference) {
            if !records.iter().any(|r| r.name == entry.canonical) {
                records.push(TeamRecord::new(entry.canonical, 0, 0));
            }
        }
    }

    records.sort_by(|a, b| {
        b.win_fraction()
            .total_cmp(&a.win_fraction())
            .then(b.wins.cmp(&a.wins))
    });

    let teams = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| RankedTeam {
            rank: idx as u32 + 1,
            name: record.name,
            wins: record.wins,
            losses: record.losses,
        })
        .collect();

    ConferenceStandings { conference, teams }
}
