//! Row-oriented tabular adapter.
//!
//! Payload shape: numeric-indexed row arrays, `[name, wins, losses, ...]`,
//! either as a top-level array or under a `rows` key. Extra trailing cells
//! (win percentage, games back) are ignored.

use super::{ensure_nonempty, parse_json, stat_u32, RawTeamRow, StandingsAdapter};
use crate::error::PipelineError;
use serde_json::Value;

pub struct TabularAdapter;

impl StandingsAdapter for TabularAdapter {
    fn name(&self) -> &'static str {
        "tabular"
    }

    fn extract(&self, payload: &str) -> Result<Vec<RawTeamRow>, PipelineError> {
        let data = parse_json(self.name(), payload)?;

        let table = if data.is_array() { &data } else { &data["rows"] };
        let rows_json = table.as_array().ok_or_else(|| PipelineError::PayloadFormat {
            adapter: self.name(),
            detail: "expected a row array or a rows key".to_string(),
        })?;

        let mut rows = Vec::new();
        for row in rows_json {
            if let Some(parsed) = parse_row(row) {
                rows.push(parsed);
            }
        }

        ensure_nonempty(self.name(), rows)
    }
}

fn parse_row(row: &Value) -> Option<RawTeamRow> {
    let cells = row.as_array()?;
    if cells.len() < 3 {
        return None;
    }
    let name = cells[0].as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(RawTeamRow {
        name: name.to_string(),
        wins: stat_u32(&cells[1])?,
        losses: stat_u32(&cells[2])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_top_level_rows() {
        let payload = json!([
            ["Denver Nuggets", 53, 29, 0.646],
            ["Memphis Grizzlies", "51", "31"],
        ]);

        let rows = TabularAdapter.extract(&payload.to_string()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Denver Nuggets");
        assert_eq!(rows[1].wins, 51);
    }

    #[test]
    fn test_extract_rows_key() {
        let payload = json!({ "rows": [["Utah Jazz", 31, 51]] });
        let rows = TabularAdapter.extract(&payload.to_string()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].losses, 51);
    }

    #[test]
    fn test_short_and_malformed_rows_are_skipped() {
        let payload = json!({ "rows": [["Utah Jazz"], [42, 1, 2], ["Phoenix Suns", 45, 37]] });
        let rows = TabularAdapter.extract(&payload.to_string()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Phoenix Suns");
    }

    #[test]
    fn test_non_array_payload_is_format_error() {
        let err = TabularAdapter.extract(r#"{"data": 1}"#).unwrap_err();
        assert!(matches!(err, PipelineError::PayloadFormat { .. }));
    }

    #[test]
    fn test_all_rows_invalid_is_extraction_empty() {
        let payload = json!([["", 1, 2]]);
        let err = TabularAdapter.extract(&payload.to_string()).unwrap_err();
        assert!(matches!(err, PipelineError::ExtractionEmpty { .. }));
    }
}
