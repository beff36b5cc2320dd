//! Source adapters: one per upstream payload shape.
//!
//! Each adapter turns a raw text payload into flat `(team, wins, losses)`
//! rows and nothing else; name resolution and ranking happen downstream.
//! An adapter that cannot locate a single valid team record fails with an
//! extraction error instead of partially populating state.

use crate::error::PipelineError;
use serde_json::Value;

pub mod conference_feed;
pub mod espn;
pub mod tabular;
pub mod text_table;

pub use conference_feed::ConferenceFeedAdapter;
pub use espn::EspnAdapter;
pub use tabular::TabularAdapter;
pub use text_table::TextTableAdapter;

/// One extracted team row, pre-resolution. The name is whatever spelling
/// the upstream used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTeamRow {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
}

/// Extraction capability over one payload shape.
pub trait StandingsAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, payload: &str) -> Result<Vec<RawTeamRow>, PipelineError>;
}

/// Parse a JSON stat value that may arrive as a number or a numeric string.
pub(crate) fn stat_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f.max(0.0) as u32),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Parse the payload as JSON or fail with this adapter's format error.
pub(crate) fn parse_json(adapter: &'static str, payload: &str) -> Result<Value, PipelineError> {
    serde_json::from_str(payload).map_err(|e| PipelineError::PayloadFormat {
        adapter,
        detail: e.to_string(),
    })
}

/// Empty extraction is an error, never a partial success.
pub(crate) fn ensure_nonempty(
    adapter: &'static str,
    rows: Vec<RawTeamRow>,
) -> Result<Vec<RawTeamRow>, PipelineError> {
    if rows.is_empty() {
        Err(PipelineError::ExtractionEmpty { adapter })
    } else {
        Ok(rows)
    }
}
