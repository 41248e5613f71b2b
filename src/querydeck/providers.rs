//! Built-in search providers.
//!
//! Built-ins are always available, cannot be edited or deleted, and take precedence
//! over custom queries during lookup. Custom queries may not reuse their prefixes.

use crate::model::Query;
use once_cell::sync::Lazy;

/// Prefix of the provider used when nothing else has been configured.
pub const DEFAULT_PROVIDER: &str = "d";

static CATALOG: Lazy<Vec<Query>> = Lazy::new(|| {
    vec![
        Query::new("Disroot", "ds", "https://search.disroot.org/search?q={q}"),
        Query::new("DuckDuckGo", "d", "https://duckduckgo.com/?q={q}"),
        Query::new("Google", "g", "https://www.google.com/search?q={q}"),
        Query::new("IMDb", "im", "https://www.imdb.com/find?q={q}"),
        Query::new("Reddit", "r", "https://www.reddit.com/search?q={q}"),
        Query::new("Spotify", "sp", "https://open.spotify.com/search/{q}"),
        Query::new(
            "The Movie Database",
            "mv",
            "https://www.themoviedb.org/search?query={q}",
        ),
        Query::new(
            "YouTube",
            "yt",
            "https://www.youtube.com/results?search_query={q}",
        ),
    ]
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinProviders {
    queries: Vec<Query>,
}

impl Default for BuiltinProviders {
    fn default() -> Self {
        Self {
            queries: CATALOG.clone(),
        }
    }
}

impl BuiltinProviders {
    /// An empty catalog, for embedders that only route to custom queries.
    pub fn none() -> Self {
        Self {
            queries: Vec::new(),
        }
    }

    /// The provider used while no default is stored, if this catalog has one.
    pub fn default_prefix(&self) -> Option<&str> {
        self.get(DEFAULT_PROVIDER).map(|q| q.prefix.as_str())
    }

    pub fn get(&self, prefix: &str) -> Option<&Query> {
        self.queries.iter().find(|q| q.prefix == prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.get(prefix).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.queries.iter()
    }
}
