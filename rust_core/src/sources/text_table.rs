//! Free-text table adapter for manually pasted standings.
//!
//! Tolerates the usual paste artifacts: ordinal prefixes ("1.", "1)"),
//! win-loss pairs written "58-24" or "58 24", and blank/header lines.
//! Lines are bucketed by case-insensitive "east"/"west" marker lines;
//! a line after a marker and before the next belongs to that conference.
//! Lines before the first marker are treated as headers and ignored.

use super::{ensure_nonempty, RawTeamRow, StandingsAdapter};
use crate::error::PipelineError;
use crate::types::Conference;
use regex::Regex;
use std::sync::OnceLock;

pub struct TextTableAdapter;

fn ordinal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+\s*[.)]\s*").expect("ordinal regex"))
}

fn dashed_record_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*[-–]\s*(\d+)").expect("record regex"))
}

fn spaced_record_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s+(\d+)\s*$").expect("record regex"))
}

impl StandingsAdapter for TextTableAdapter {
    fn name(&self) -> &'static str {
        "text_table"
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawTeamRow>, PipelineError> {
        let mut rows = Vec::new();
        let mut bucket: Option<Conference> = None;

        for line in payload.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let stripped = ordinal_re().replace(line, "");
            match parse_record(&stripped) {
                Some(row) => {
                    if bucket.is_some() {
                        rows.push(row);
                    }
                }
                None => {
                    // Not a team row: maybe a conference marker line.
                    let lower = line.to_lowercase();
                    if lower.contains("east") {
                        bucket = Some(Conference::East);
                    } else if lower.contains("west") {
                        bucket = Some(Conference::West);
                    }
                }
            }
        }

        ensure_nonempty(self.name(), rows)
    }
}

/// Split a line into team name and win-loss pair. Dashed records ("58-24")
/// take precedence over trailing space-separated pairs ("58 24").
fn parse_record(line: &str) -> Option<RawTeamRow> {
    let caps = dashed_record_re()
        .captures(line)
        .or_else(|| spaced_record_re().captures(line))?;

    let full = caps.get(0)?;
    let name = line[..full.start()].trim().trim_end_matches(&[':', ',', '|']).trim();
    if name.is_empty() || name.chars().all(|c| !c.is_alphabetic()) {
        return None;
    }

    Some(RawTeamRow {
        name: name.to_string(),
        wins: caps[1].parse().ok()?,
        losses: caps[2].parse().ok()?,
    })
}
