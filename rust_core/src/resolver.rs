//! Team-name resolution across upstream aliasing schemes.
//!
//! Resolution order: exact canonical, alias table, substring containment,
//! then give up and hand the raw name back. An unresolved name resolves to
//! itself and is silently dropped when standings are built; we log it with
//! the closest fuzzy candidate so the degradation is at least diagnosable.

use crate::registry::TeamRegistry;
use std::sync::Arc;
use strsim::jaro_winkler;
use tracing::warn;

/// Lowercase, strip punctuation, collapse whitespace.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Seam for the matching strategy: callers only see `resolve`, so a stricter
/// algorithm (edit distance, token-set comparison) can be swapped in without
/// touching the adapters or the orchestrator.
pub trait NameResolver: Send + Sync {
    /// Map an observed spelling to a canonical team name. Returns the raw
    /// name unchanged when no match is found.
    fn resolve(&self, raw: &str) -> String;
}

/// Default resolver backed by the static registry's alias table, with a
/// substring-containment last resort.
pub struct AliasResolver {
    registry: Arc<TeamRegistry>,
}

impl AliasResolver {
    pub fn new(registry: Arc<TeamRegistry>) -> Self {
        Self { registry }
    }

    /// Closest canonical name by Jaro-Winkler, for the unresolved-name log.
    fn closest_candidate(&self, normalized: &str) -> Option<(&'static str, f64)> {
        self.registry
            .teams()
            .map(|entry| {
                let score = jaro_winkler(normalized, &normalize(entry.canonical));
                (entry.canonical, score)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl NameResolver for AliasResolver {
    fn resolve(&self, raw: &str) -> String {
        // 1. Exact canonical name, returned as-is.
        if self.registry.contains(raw) {
            return raw.to_string();
        }

        let norm = normalize(raw);
        if norm.is_empty() {
            return raw.to_string();
        }

        // Normalized canonical spellings ("LOS ANGELES LAKERS") land here.
        if let Some(entry) = self.registry.lookup_canonical(&norm) {
            return entry.canonical.to_string();
        }

        // 2. Alias table.
        if let Some(entry) = self.registry.lookup_alias(&norm) {
            return entry.canonical.to_string();
        }

        // 3. Substring containment, either direction. First registry match
        // wins; short strings contained in two canonical names resolve to
        // whichever team the registry lists first. Known limitation.
        for entry in self.registry.teams() {
            let canon_norm = normalize(entry.canonical);
            if canon_norm.contains(&norm) || norm.contains(&canon_norm) {
                return entry.canonical.to_string();
            }
        }

        // 4. No match: the raw name flows through and downstream stages
        // drop it from the ranking.
        match self.closest_candidate(&norm) {
            Some((candidate, score)) => warn!(
                raw,
                closest = candidate,
                score = format!("{score:.2}"),
                "unresolved team name"
            ),
            None => warn!(raw, "unresolved team name"),
        }
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AliasResolver {
        AliasResolver::new(Arc::new(TeamRegistry::load().unwrap()))
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  L.A.  Lakers "), "la lakers");
        assert_eq!(normalize("Philadelphia 76ers"), "philadelphia 76ers");
        assert_eq!(normalize("W-L"), "wl");
    }

    #[test]
    fn test_canonical_names_resolve_to_themselves() {
        let resolver = resolver();
        let registry = TeamRegistry::load().unwrap();
        for entry in registry.teams() {
            assert_eq!(resolver.resolve(entry.canonical), entry.canonical);
        }
    }

    #[test]
    fn test_all_aliases_resolve_to_canonical() {
        let resolver = resolver();
        let registry = TeamRegistry::load().unwrap();
        for entry in registry.teams() {
            for alias in entry.aliases {
                assert_eq!(
                    resolver.resolve(alias),
                    entry.canonical,
                    "alias {alias:?} did not resolve"
                );
            }
        }
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("SIXERS"), "Philadelphia 76ers");
        assert_eq!(resolver.resolve("L.A. Clippers"), "Los Angeles Clippers");
        assert_eq!(
            resolver.resolve("OKLAHOMA CITY THUNDER"),
            "Oklahoma City Thunder"
        );
    }

    #[test]
    fn test_containment_fallback() {
        let resolver = resolver();
        // Raw name is a substring of a canonical name.
        assert_eq!(resolver.resolve("Timberwolve"), "Minnesota Timberwolves");
        // Canonical name is a substring of the raw name.
        assert_eq!(
            resolver.resolve("Utah Jazz (via trade)"),
            "Utah Jazz"
        );
    }

    #[test]
    fn test_unresolved_name_passes_through() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("Seattle SuperSonics"), "Seattle SuperSonics");
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn test_ambiguous_containment_takes_first_registry_match() {
        let resolver = resolver();
        // "Los Angeles" is contained in both LA canonical names; the
        // Clippers precede the Lakers in registry order.
        assert_eq!(resolver.resolve("Los Angeles"), "Los Angeles Clippers");
    }
}
