//! Error taxonomy for the standings pipeline.
//!
//! The first three variants are "try next source" signals inside the fetch
//! orchestrator; only `AllSourcesFailed` ever surfaces to the user. Roster
//! and prediction errors are configuration problems and fatal at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Transport/DNS/timeout failure reaching a source or proxy route.
    #[error("network error reaching {url}")]
    Network {
        url: String,
        #[source]
        cause: reqwest::Error,
    },

    /// Response parses as structured data but lacks the expected shape.
    #[error("unexpected {adapter} payload: {detail}")]
    PayloadFormat { adapter: &'static str, detail: String },

    /// Adapter ran but produced zero team records.
    #[error("{adapter} extracted no team records")]
    ExtractionEmpty { adapter: &'static str },

    /// Every configured source (and proxy route) was exhausted.
    #[error("all standings sources failed after {attempts} attempts (last: {last_error})")]
    AllSourcesFailed { attempts: usize, last_error: String },

    /// The static team table violates the 15/15 two-conference invariant.
    #[error("invalid roster configuration: {0}")]
    InvalidRoster(String),

    /// A predictor's list is not a valid 15-team conference ordering.
    #[error("invalid prediction list for {player}: {detail}")]
    InvalidPrediction { player: String, detail: String },

    /// Result cache I/O failure.
    #[error("cache i/o error")]
    Cache(#[from] std::io::Error),
}

impl PipelineError {
    /// True for failures the orchestrator converts into fallback transitions.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            PipelineError::Network { .. }
                | PipelineError::PayloadFormat { .. }
                | PipelineError::ExtractionEmpty { .. }
        )
    }
}
