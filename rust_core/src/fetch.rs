//! Fetch orchestrator: ordered source fallback with proxy routing.
//!
//! One coherent pipeline with a pluggable, ordered adapter list; adding or
//! reordering sources is configuration, not new code. Attempts are strictly
//! sequential — correctness depends on priority order, so sources are never
//! raced. Each proxied source may additionally be retried through alternate
//! network intermediaries for hosts that block cross-origin requests.

use crate::cache::{ResultCache, STANDINGS_KEY};
use crate::error::PipelineError;
use crate::registry::TeamRegistry;
use crate::resolver::NameResolver;
use crate::sources::{
    ConferenceFeedAdapter, EspnAdapter, RawTeamRow, StandingsAdapter, TextTableAdapter,
};
use crate::standings::build_conference;
use crate::types::{Conference, StandingsSnapshot, TeamRecord};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const ESPN_STANDINGS_URL: &str =
    "https://site.api.espn.com/apis/v2/sports/basketball/nba/standings?region=us&lang=en";
pub const BACKUP_STANDINGS_URL: &str =
    "https://data.nba.net/data/10s/prod/v1/current/standings_conference.json";

/// Transport seam: tests inject canned payloads, production uses reqwest.
#[async_trait]
pub trait PayloadTransport: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, PipelineError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Per-attempt timeout bounds worst-case fetch latency; the source
    /// ordering otherwise has no upper bound on total time.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

#[async_trait]
impl PayloadTransport for HttpTransport {
    async fn fetch_text(&self, url: &str) -> Result<String, PipelineError> {
        let map_err = |cause| PipelineError::Network {
            url: url.to_string(),
            cause,
        };
        let response = self.client.get(url).send().await.map_err(map_err)?;
        response.text().await.map_err(|cause| PipelineError::Network {
            url: url.to_string(),
            cause,
        })
    }
}

/// Alternate network intermediaries, tried in fixed order. The first route
/// whose response the adapter can parse wins for that source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyRoute {
    Direct,
    /// allorigins.win raw passthrough.
    AllOrigins,
    /// Jina text reader; serves cross-origin, body is still parseable text.
    JinaReader,
}

impl ProxyRoute {
    pub const DEFAULT_ORDER: [ProxyRoute; 3] = [
        ProxyRoute::Direct,
        ProxyRoute::AllOrigins,
        ProxyRoute::JinaReader,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProxyRoute::Direct => "direct",
            ProxyRoute::AllOrigins => "allorigins",
            ProxyRoute::JinaReader => "jina",
        }
    }

    pub fn build_url(&self, url: &str) -> String {
        match self {
            ProxyRoute::Direct => url.to_string(),
            ProxyRoute::AllOrigins => format!(
                "https://api.allorigins.win/raw?url={}",
                urlencoding::encode(url)
            ),
            ProxyRoute::JinaReader => format!(
                "https://r.jina.ai/http/{}",
                url.trim_start_matches("https://").trim_start_matches("http://")
            ),
        }
    }
}

/// One configured upstream: a URL paired with the adapter that understands
/// its payload shape.
pub struct SourceSpec {
    pub name: &'static str,
    pub url: String,
    pub adapter: Box<dyn StandingsAdapter>,
    /// Retry through proxy routes when the direct attempt fails.
    pub proxied: bool,
    /// Backfill missing teams to guarantee complete 15-team tables.
    /// Required on the final fallback tier.
    pub backfill: bool,
}

/// The default source ladder from the production configuration: ESPN
/// first, league backup feed second (and final, hence backfilled).
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec {
            name: "espn",
            url: ESPN_STANDINGS_URL.to_string(),
            adapter: Box::new(EspnAdapter),
            proxied: true,
            backfill: false,
        },
        SourceSpec {
            name: "nba_backup",
            url: BACKUP_STANDINGS_URL.to_string(),
            adapter: Box::new(ConferenceFeedAdapter),
            proxied: true,
            backfill: true,
        },
    ]
}

/// Owns the "current standings" lifecycle: sequences sources, resolves
/// names, builds ranked tables, persists the snapshot.
pub struct FetchOrchestrator {
    registry: Arc<TeamRegistry>,
    resolver: Arc<dyn NameResolver>,
    transport: Arc<dyn PayloadTransport>,
    cache: Arc<dyn ResultCache>,
    sources: Vec<SourceSpec>,
    proxies: Vec<ProxyRoute>,
}

impl FetchOrchestrator {
    pub fn new(
        registry: Arc<TeamRegistry>,
        resolver: Arc<dyn NameResolver>,
        transport: Arc<dyn PayloadTransport>,
        cache: Arc<dyn ResultCache>,
        sources: Vec<SourceSpec>,
    ) -> Self {
        Self {
            registry,
            resolver,
            transport,
            cache,
            sources,
            proxies: ProxyRoute::DEFAULT_ORDER.to_vec(),
        }
    }

    /// An empty list would leave proxied sources with zero attempts, so it
    /// collapses to a direct-only configuration.
    pub fn with_proxies(mut self, proxies: Vec<ProxyRoute>) -> Self {
        self.proxies = if proxies.is_empty() {
            vec![ProxyRoute::Direct]
        } else {
            proxies
        };
        self
    }

    /// Try every configured source in priority order; first success wins.
    /// Exhaustion is a terminal failure for this invocation only — the
    /// cached snapshot is left untouched for the caller to fall back on.
    pub async fn fetch_standings(&self) -> Result<StandingsSnapshot, PipelineError> {
        let mut attempts = 0;
        let mut last_error = String::from("no sources configured");

        for source in &self.sources {
            attempts += 1;
            match self.try_source(source).await {
                Ok(rows) => {
                    let snapshot = self.build_snapshot(rows, source);
                    info!(
                        source = source.name,
                        east = snapshot.east.teams.len(),
                        west = snapshot.west.teams.len(),
                        complete = snapshot.is_complete(),
                        "standings fetched"
                    );
                    self.persist(&snapshot);
                    return Ok(snapshot);
                }
                Err(e) => {
                    warn!(source = source.name, error = %e, "standings source failed, advancing");
                    last_error = e.to_string();
                }
            }
        }

        Err(PipelineError::AllSourcesFailed {
            attempts,
            last_error,
        })
    }

    /// Feed manually pasted standings text through the same resolve/build/
    /// cache path as an automated fetch. Manual entry is a last-resort
    /// tier, so missing teams are backfilled.
    pub fn ingest_text(&self, raw: &str) -> Result<StandingsSnapshot, PipelineError> {
        let adapter = TextTableAdapter;
        let rows = adapter.extract(raw)?;
        let snapshot = self.assemble(rows, adapter.name(), true);
        info!(
            east = snapshot.east.teams.len(),
            west = snapshot.west.teams.len(),
            "standings ingested from pasted text"
        );
        self.persist(&snapshot);
        Ok(snapshot)
    }

    /// Last persisted snapshot, if any.
    pub fn load_cached(&self) -> Option<StandingsSnapshot> {
        let raw = self.cache.load(STANDINGS_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "discarding unreadable cached snapshot");
                None
            }
        }
    }

    async fn try_source(&self, source: &SourceSpec) -> Result<Vec<RawTeamRow>, PipelineError> {
        let direct = [ProxyRoute::Direct];
        let routes: &[ProxyRoute] = if source.proxied {
            &self.proxies
        } else {
            &direct
        };

        let mut last_error = None;
        for route in routes {
            let url = route.build_url(&source.url);
            let outcome = match self.transport.fetch_text(&url).await {
                Ok(text) => source.adapter.extract(&text),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(rows) => {
                    debug!(
                        source = source.name,
                        route = route.label(),
                        rows = rows.len(),
                        "source attempt succeeded"
                    );
                    return Ok(rows);
                }
                Err(e) => {
                    debug!(
                        source = source.name,
                        route = route.label(),
                        error = %e,
                        "source attempt failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(PipelineError::PayloadFormat {
            adapter: source.name,
            detail: "no fetch routes attempted".to_string(),
        }))
    }

    fn build_snapshot(&self, rows: Vec<RawTeamRow>, source: &SourceSpec) -> StandingsSnapshot {
        self.assemble(rows, source.name, source.backfill)
    }

    /// Resolve raw names, partition by registry conference, rank. Teams
    /// the resolver could not map have no conference and drop out here —
    /// intentional degradation, not a failure.
    fn assemble(&self, rows: Vec<RawTeamRow>, source: &str, backfill: bool) -> StandingsSnapshot {
        let mut east = Vec::new();
        let mut west = Vec::new();
        let mut seen = FxHashSet::default();

        for row in rows {
            let canonical = self.resolver.resolve(&row.name);
            if !seen.insert(canonical.clone()) {
                continue;
            }
            let record = TeamRecord::new(canonical.clone(), row.wins, row.losses);
            match self.registry.conference_of(&canonical) {
                Some(Conference::East) => east.push(record),
                Some(Conference::West) => west.push(record),
                None => debug!(name = %row.name, "dropping unresolved team from ranking"),
            }
        }

        StandingsSnapshot {
            east: build_conference(Conference::East, east, backfill, &self.registry),
            west: build_conference(Conference::West, west, backfill, &self.registry),
            source: source.to_string(),
            fetched_at: Utc::now(),
        }
    }

    fn persist(&self, snapshot: &StandingsSnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(raw) => {
                if let Err(e) = self.cache.save(STANDINGS_KEY, &raw) {
                    warn!(error = %e, "failed to persist standings snapshot");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize standings snapshot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_urls() {
        let url = "https://example.com/api?x=1";
        assert_eq!(ProxyRoute::Direct.build_url(url), url);
        assert_eq!(
            ProxyRoute::AllOrigins.build_url(url),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fexample.com%2Fapi%3Fx%3D1"
        );
        assert_eq!(
            ProxyRoute::JinaReader.build_url(url),
            "https://r.jina.ai/http/example.com/api?x=1"
        );
    }

    #[test]
    fn test_default_sources_order() {
        let sources = default_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].name, "espn");
        assert_eq!(sources[1].name, "nba_backup");
        // The final tier must guarantee complete tables.
        assert!(sources.last().map(|s| s.backfill).unwrap_or(false));
    }
}
