use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reference key used by routes to point at a hub record.
pub type HubId = String;

/// Minimum similarity score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// A shipping hub located in a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    /// Reference key routes use. JSON snapshots may omit it, in which case the
    /// hub name doubles as the key.
    #[serde(default)]
    pub id: HubId,
    pub code: String,
    /// Display name; this is the node identity in the hub graph.
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub is_central: bool,
}

/// An ordered sequence of hub references.
///
/// The city labels are informational; graph construction only looks at
/// `hubs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub name: String,
    pub source_city: String,
    pub destination_city: String,
    #[serde(default)]
    pub intermediate_cities: Vec<String>,
    pub hubs: Vec<HubId>,
}

/// A complete, consistent view of the hub and route feeds.
///
/// Graph builders only ever read from a snapshot, so every lookup after the
/// initial fetch happens in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hubs: Vec<Hub>,
    pub routes: Vec<Route>,
}

impl Snapshot {
    /// Build a validated snapshot.
    ///
    /// Fails when a route names fewer than two hubs or when two hubs share the
    /// same reference key. Dangling hub references are accepted here; the
    /// graph builders skip them pair by pair.
    pub fn new(hubs: Vec<Hub>, routes: Vec<Route>) -> Result<Self> {
        let snapshot = Self { hubs, routes };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the structural requirements documented on [`Snapshot::new`].
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for hub in &self.hubs {
            if !seen.insert(hub.id.as_str()) {
                return Err(Error::DuplicateHubId { id: hub.id.clone() });
            }
        }

        if let Some(route) = self.routes.iter().find(|route| route.hubs.len() < 2) {
            return Err(Error::MalformedRoute {
                route: route.name.clone(),
                hubs: route.hubs.len(),
            });
        }

        Ok(())
    }

    /// Index hubs by their reference key.
    pub fn hub_index(&self) -> HashMap<&str, &Hub> {
        self.hubs.iter().map(|hub| (hub.id.as_str(), hub)).collect()
    }

    /// Lookup a hub by its case-sensitive display name.
    pub fn hub_by_name(&self, name: &str) -> Option<&Hub> {
        self.hubs.iter().find(|hub| hub.name == name)
    }

    /// First hub, in feed order, located in `city`.
    pub fn first_hub_in_city(&self, city: &str) -> Option<&Hub> {
        self.hubs.iter().find(|hub| hub.city == city)
    }

    /// Distinct city labels in sorted order.
    pub fn cities(&self) -> Vec<&str> {
        self.hubs
            .iter()
            .map(|hub| hub.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Hub names that closely resemble `name`, best match first.
    pub fn fuzzy_hub_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.hubs.iter().map(|hub| hub.name.as_str()), name, limit)
    }

    /// City labels that closely resemble `city`, best match first.
    pub fn fuzzy_city_matches(&self, city: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.cities(), city, limit)
    }
}

/// Supplier of hub and route records.
///
/// Implementations fetch each feed in one batch; failures propagate to the
/// caller and must never be reported as an empty feed.
pub trait NetworkFeed {
    /// Fetch every hub record.
    fn hubs(&self) -> Result<Vec<Hub>>;

    /// Fetch every route record.
    fn routes(&self) -> Result<Vec<Route>>;

    /// Fetch both feeds and validate them as one snapshot.
    fn snapshot(&self) -> Result<Snapshot> {
        Snapshot::new(self.hubs()?, self.routes()?)
    }
}

impl NetworkFeed for Snapshot {
    fn hubs(&self) -> Result<Vec<Hub>> {
        Ok(self.hubs.clone())
    }

    fn routes(&self) -> Result<Vec<Route>> {
        Ok(self.routes.clone())
    }

    fn snapshot(&self) -> Result<Snapshot> {
        self.validate()?;
        Ok(self.clone())
    }
}

fn fuzzy_matches<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    name: &str,
    limit: usize,
) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|candidate| {
            let score = strsim::normalized_damerau_levenshtein(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
