//! Standings monitor: periodically refreshes conference standings through
//! the source fallback ladder, rescored predictions included, and keeps the
//! latest good snapshot in shared state and on disk.

mod config;

use anyhow::{Context, Result};
use courtside_core::{
    default_sources, score_all, AliasResolver, AppState, FetchOrchestrator, FileCache,
    HttpTransport, ProxyRoute, TeamRegistry,
};
use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::MonitorConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = MonitorConfig::from_env();
    info!(?config, "starting standings monitor");

    // A bad roster table or prediction list is a deploy error, not a
    // runtime condition to retry.
    let registry = Arc::new(TeamRegistry::load().context("team registry failed validation")?);
    let predictions = courtside_core::load_predictions(&registry)
        .context("prediction lists failed validation")?;

    let resolver = Arc::new(AliasResolver::new(registry.clone()));
    let transport = Arc::new(HttpTransport::new(config.request_timeout));
    let cache = Arc::new(FileCache::new(&config.cache_path));
    let mut orchestrator = FetchOrchestrator::new(
        registry,
        resolver,
        transport,
        cache,
        default_sources(),
    );
    if !config.proxy_fallback {
        orchestrator = orchestrator.with_proxies(vec![ProxyRoute::Direct]);
    }

    let state = AppState::shared();

    // Warm start: serve the last persisted snapshot until the first
    // refresh lands.
    if let Some(snapshot) = orchestrator.load_cached() {
        info!(source = %snapshot.source, fetched_at = %snapshot.fetched_at, "restored cached standings");
        let scores = score_all(&predictions, &snapshot);
        state.write().apply_snapshot(snapshot, scores);
    }

    let mut ticker = interval(config.poll_interval);
    // Refreshes are strictly sequential; a tick that fires while one is
    // still running is dropped rather than queued.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match orchestrator.fetch_standings().await {
            Ok(snapshot) => {
                let scores = score_all(&predictions, &snapshot);
                for score in &scores {
                    info!(
                        player = %score.player,
                        east = score.east.accuracy,
                        west = score.west.accuracy,
                        combined = score.combined,
                        "prediction accuracy"
                    );
                }
                state.write().apply_snapshot(snapshot, scores);
            }
            Err(e) => {
                // Keep serving the previous snapshot; only the error
                // marker changes.
                warn!(error = %e, "standings refresh failed");
                let mut guard = state.write();
                if guard.standings.is_none() {
                    error!("no standings available yet and refresh failed");
                }
                guard.record_failure(e.to_string());
            }
        }
    }
}
