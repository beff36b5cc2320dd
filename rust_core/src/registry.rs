//! Static team registry: canonical identities, conference membership, aliases.
//!
//! The table below is configuration, not pipeline logic. `TeamRegistry::load`
//! enforces the structural invariant the rest of the pipeline depends on:
//! exactly 30 teams split 15/15 across the two conferences, with no alias
//! string claimed by two different teams.

use crate::error::PipelineError;
use crate::resolver::normalize;
use crate::types::Conference;
use rustc_hash::FxHashMap;

/// One canonical team identity. Alias strings are matched
/// case/punctuation-insensitively (see `resolver::normalize`).
#[derive(Debug)]
pub struct TeamEntry {
    pub canonical: &'static str,
    pub conference: Conference,
    pub aliases: &'static [&'static str],
}

/// The full league roster. Aliases cover the spellings observed across the
/// upstream feeds: nicknames, city names, and scoreboard abbreviations.
pub static TEAM_TABLE: &[TeamEntry] = &[
    // Eastern Conference
    TeamEntry {
        canonical: "Atlanta Hawks",
        conference: Conference::East,
        aliases: &["hawks", "atlanta", "atl"],
    },
    TeamEntry {
        canonical: "Boston Celtics",
        conference: Conference::East,
        aliases: &["celtics", "boston", "bos"],
    },
    TeamEntry {
        canonical: "Brooklyn Nets",
        conference: Conference::East,
        aliases: &["nets", "brooklyn", "bkn"],
    },
    TeamEntry {
        canonical: "Charlotte Hornets",
        conference: Conference::East,
        aliases: &["hornets", "charlotte", "cha"],
    },
    TeamEntry {
        canonical: "Chicago Bulls",
        conference: Conference::East,
        aliases: &["bulls", "chicago", "chi"],
    },
    TeamEntry {
        canonical: "Cleveland Cavaliers",
        conference: Conference::East,
        aliases: &["cavaliers", "cavs", "cleveland", "cle"],
    },
    TeamEntry {
        canonical: "Detroit Pistons",
        conference: Conference::East,
        aliases: &["pistons", "detroit", "det"],
    },
    TeamEntry {
        canonical: "Indiana Pacers",
        conference: Conference::East,
        aliases: &["pacers", "indiana", "ind"],
    },
    TeamEntry {
        canonical: "Miami Heat",
        conference: Conference::East,
        aliases: &["heat", "miami", "mia"],
    },
    TeamEntry {
        canonical: "Milwaukee Bucks",
        conference: Conference::East,
        aliases: &["bucks", "milwaukee", "mil"],
    },
    TeamEntry {
        canonical: "New York Knicks",
        conference: Conference::East,
        aliases: &["knicks", "ny knicks", "new york", "nyk", "ny"],
    },
    TeamEntry {
        canonical: "Orlando Magic",
        conference: Conference::East,
        aliases: &["magic", "orlando", "orl"],
    },
    TeamEntry {
        canonical: "Philadelphia 76ers",
        conference: Conference::East,
        aliases: &["76ers", "sixers", "philadelphia", "philly", "phi"],
    },
    TeamEntry {
        canonical: "Toronto Raptors",
        conference: Conference::East,
        aliases: &["raptors", "toronto", "tor"],
    },
    TeamEntry {
        canonical: "Washington Wizards",
        conference: Conference::East,
        aliases: &["wizards", "washington", "was", "wsh"],
    },
    // Western Conference
    TeamEntry {
        canonical: "Dallas Mavericks",
        conference: Conference::West,
        aliases: &["mavericks", "mavs", "dallas", "dal"],
    },
    TeamEntry {
        canonical: "Denver Nuggets",
        conference: Conference::West,
        aliases: &["nuggets", "denver", "den"],
    },
    TeamEntry {
        canonical: "Golden State Warriors",
        conference: Conference::West,
        aliases: &["warriors", "golden state", "gsw", "gs", "dubs"],
    },
    TeamEntry {
        canonical: "Houston Rockets",
        conference: Conference::West,
        aliases: &["rockets", "houston", "hou"],
    },
    TeamEntry {
        canonical: "Los Angeles Clippers",
        conference: Conference::West,
        aliases: &["clippers", "la clippers", "clips", "lac"],
    },
    TeamEntry {
        canonical: "Los Angeles Lakers",
        conference: Conference::West,
        aliases: &["lakers", "la lakers", "lal"],
    },
    TeamEntry {
        canonical: "Memphis Grizzlies",
        conference: Conference::West,
        aliases: &["grizzlies", "memphis", "mem"],
    },
    TeamEntry {
        canonical: "Minnesota Timberwolves",
        conference: Conference::West,
        aliases: &["timberwolves", "wolves", "minnesota", "min"],
    },
    TeamEntry {
        canonical: "New Orleans Pelicans",
        conference: Conference::West,
        aliases: &["pelicans", "pels", "new orleans", "nop", "no"],
    },
    TeamEntry {
        canonical: "Oklahoma City Thunder",
        conference: Conference::West,
        aliases: &["thunder", "oklahoma city", "okc"],
    },
    TeamEntry {
        canonical: "Phoenix Suns",
        conference: Conference::West,
        aliases: &["suns", "phoenix", "phx"],
    },
    TeamEntry {
        canonical: "Portland Trail Blazers",
        conference: Conference::West,
        aliases: &["trail blazers", "blazers", "portland", "por"],
    },
    TeamEntry {
        canonical: "Sacramento Kings",
        conference: Conference::West,
        aliases: &["kings", "sacramento", "sac"],
    },
    TeamEntry {
        canonical: "San Antonio Spurs",
        conference: Conference::West,
        aliases: &["spurs", "san antonio", "sas", "sa"],
    },
    TeamEntry {
        canonical: "Utah Jazz",
        conference: Conference::West,
        aliases: &["jazz", "utah", "uta"],
    },
];

/// Validated roster catalog with fast canonical/alias lookups.
/// Loaded once at startup; immutable afterwards.
#[derive(Debug)]
pub struct TeamRegistry {
    teams: Vec<&'static TeamEntry>,
    by_canonical: FxHashMap<String, &'static TeamEntry>,
    by_alias: FxHashMap<String, &'static TeamEntry>,
}

impl TeamRegistry {
    /// Load the built-in league roster. Fatal if the table violates the
    /// two-conference 15/15 invariant.
    pub fn load() -> Result<Self, PipelineError> {
        Self::from_table(TEAM_TABLE)
    }

    fn from_table(table: &'static [TeamEntry]) -> Result<Self, PipelineError> {
        let east = table
            .iter()
            .filter(|t| t.conference == Conference::East)
            .count();
        let west = table.len() - east;
        if east != crate::types::TEAMS_PER_CONFERENCE || west != crate::types::TEAMS_PER_CONFERENCE
        {
            return Err(PipelineError::InvalidRoster(format!(
                "expected a 15/15 conference split, got {east} east / {west} west"
            )));
        }

        let mut by_canonical = FxHashMap::default();
        let mut by_alias: FxHashMap<String, &'static TeamEntry> = FxHashMap::default();

        for entry in table {
            if by_canonical
                .insert(normalize(entry.canonical), entry)
                .is_some()
            {
                return Err(PipelineError::InvalidRoster(format!(
                    "duplicate canonical name: {}",
                    entry.canonical
                )));
            }
            if entry.aliases.is_empty() {
                return Err(PipelineError::InvalidRoster(format!(
                    "{} has no aliases",
                    entry.canonical
                )));
            }
            for alias in entry.aliases {
                let key = normalize(alias);
                if let Some(existing) = by_alias.insert(key, entry) {
                    if existing.canonical != entry.canonical {
                        return Err(PipelineError::InvalidRoster(format!(
                            "alias {:?} claimed by both {} and {}",
                            alias, existing.canonical, entry.canonical
                        )));
                    }
                }
            }
        }

        Ok(Self {
            teams: table.iter().collect(),
            by_canonical,
            by_alias,
        })
    }

    /// Exact canonical-name membership check (no normalization).
    pub fn contains(&self, canonical: &str) -> bool {
        self.teams.iter().any(|t| t.canonical == canonical)
    }

    pub fn conference_of(&self, canonical: &str) -> Option<Conference> {
        self.teams
            .iter()
            .find(|t| t.canonical == canonical)
            .map(|t| t.conference)
    }

    /// Lookup by normalized canonical name.
    pub fn lookup_canonical(&self, normalized: &str) -> Option<&'static TeamEntry> {
        self.by_canonical.get(normalized).copied()
    }

    /// Lookup by normalized alias string.
    pub fn lookup_alias(&self, normalized: &str) -> Option<&'static TeamEntry> {
        self.by_alias.get(normalized).copied()
    }

    /// All teams, in registry iteration order (used as the containment
    /// fallback tie-break and the backfill ordering).
    pub fn teams(&self) -> impl Iterator<Item = &'static TeamEntry> + '_ {
        self.teams.iter().copied()
    }

    pub fn conference_teams(
        &self,
        conference: Conference,
    ) -> impl Iterator<Item = &'static TeamEntry> + '_ {
        self.teams().filter(move |t| t.conference == conference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_roster() {
        let registry = TeamRegistry::load().unwrap();
        assert_eq!(registry.teams().count(), 30);
        assert_eq!(registry.conference_teams(Conference::East).count(), 15);
        assert_eq!(registry.conference_teams(Conference::West).count(), 15);
    }

    #[test]
    fn test_conference_lookup() {
        let registry = TeamRegistry::load().unwrap();
        assert_eq!(
            registry.conference_of("Boston Celtics"),
            Some(Conference::East)
        );
        assert_eq!(
            registry.conference_of("Utah Jazz"),
            Some(Conference::West)
        );
        assert_eq!(registry.conference_of("Seattle SuperSonics"), None);
    }

    #[test]
    fn test_alias_lookup_is_normalized() {
        let registry = TeamRegistry::load().unwrap();
        let entry = registry.lookup_alias(&normalize("Sixers")).unwrap();
        assert_eq!(entry.canonical, "Philadelphia 76ers");
    }

    #[test]
    fn test_rejects_unbalanced_roster() {
        static BAD_TABLE: &[TeamEntry] = &[
            TeamEntry {
                canonical: "Boston Celtics",
                conference: Conference::East,
                aliases: &["celtics"],
            },
            TeamEntry {
                canonical: "Utah Jazz",
                conference: Conference::West,
                aliases: &["jazz"],
            },
        ];

        let err = TeamRegistry::from_table(BAD_TABLE).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidRoster(_)));
    }

    #[test]
    fn test_builtin_aliases_are_unambiguous() {
        let registry = TeamRegistry::load().unwrap();
        let mut seen: FxHashMap<String, &str> = FxHashMap::default();
        for entry in registry.teams() {
            for alias in entry.aliases {
                let prior = seen.insert(normalize(alias), entry.canonical);
                assert!(
                    prior.is_none() || prior == Some(entry.canonical),
                    "alias {alias:?} is claimed by two teams"
                );
            }
        }
    }
}
