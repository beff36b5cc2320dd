//! ESPN standings adapter.
//!
//! Payload shape: nested JSON with conferences under `children`, divisions
//! one level below, and per-team entries carrying named stat fields.
//! Some responses skip the division layer and hang `standings.entries`
//! directly off the conference node; both layouts are accepted.

use super::{ensure_nonempty, parse_json, stat_u32, RawTeamRow, StandingsAdapter};
use crate::error::PipelineError;
use serde_json::Value;

pub struct EspnAdapter;

impl StandingsAdapter for EspnAdapter {
    fn name(&self) -> &'static str {
        "espn"
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawTeamRow>, PipelineError> {
        let data = parse_json(self.name(), payload)?;

        let conferences = data["children"]
            .as_array()
            .ok_or_else(|| PipelineError::PayloadFormat {
                adapter: self.name(),
                detail: "missing children array".to_string(),
            })?;

        let mut rows = Vec::new();
        for conference in conferences {
            if let Some(entries) = conference["standings"]["entries"].as_array() {
                collect_entries(entries, &mut rows);
            } else if let Some(divisions) = conference["children"].as_array() {
                for division in divisions {
                    if let Some(entries) = division["standings"]["entries"].as_array() {
                        collect_entries(entries, &mut rows);
                    }
                }
            }
        }

        ensure_nonempty(self.name(), rows)
    }
}

fn collect_entries(entries: &[Value], rows: &mut Vec<RawTeamRow>) {
    for entry in entries {
        let Some(name) = entry["team"]["displayName"].as_str() else {
            continue;
        };
        let stats = entry["stats"].as_array();
        rows.push(RawTeamRow {
            name: name.to_string(),
            wins: stat_by_name(stats, "wins"),
            losses: stat_by_name(stats, "losses"),
        });
    }
}

/// ESPN stat entries are `{name, value, displayValue, ...}` objects.
fn stat_by_name(stats: Option<&Vec<Value>>, key: &str) -> u32 {
    stats
        .into_iter()
        .flatten()
        .find(|s| s["name"].as_str() == Some(key))
        .and_then(|s| stat_u32(&s["value"]))
        .unwrap_or(0)
}
