//! Courtside core: NBA standings ingestion and prediction scoring.
//!
//! The pipeline fetches conference standings from an ordered ladder of
//! upstream sources (with proxy fallback), normalizes team names through
//! an alias-aware resolver, ranks each conference deterministically, and
//! scores preseason prediction lists by rank distance. Services in this
//! workspace compose these pieces; nothing here spawns its own runtime.

pub mod cache;
pub mod error;
pub mod fetch;
pub mod predictions;
pub mod registry;
pub mod resolver;
pub mod scoring;
pub mod sources;
pub mod standings;
pub mod state;
pub mod types;

pub use cache::{FileCache, MemoryCache, ResultCache};
pub use error::PipelineError;
pub use fetch::{
    default_sources, FetchOrchestrator, HttpTransport, PayloadTransport, ProxyRoute, SourceSpec,
};
pub use predictions::{load_predictions, PredictionSet};
pub use registry::TeamRegistry;
pub use resolver::{AliasResolver, NameResolver};
pub use scoring::{score_all, ConferenceScore, PlayerScore};
pub use state::{AppState, SharedState};
pub use types::{Conference, ConferenceStandings, RankedTeam, StandingsSnapshot, TeamRecord};
