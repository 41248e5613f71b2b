//! # Query Resolver
//!
//! Turns free-text input into a destination URL.
//!
//! ```text
//! "yt lofi beats"  ──►  prefix "yt" matches  ──►  youtube template + "lofi beats"
//! "lofi beats"     ──►  "lofi" matches nothing ──►  default template + "lofi beats"
//! ```
//!
//! The input is split once, on the first whitespace. If the first word names a
//! provider (built-ins first, then custom queries), the rest of the input is the
//! query text, possibly empty. Otherwise the whole input, untouched, goes to the
//! default provider: it was never meant as a prefixed query, so it is not re-parsed.

use crate::error::{QueryDeckError, Result};
use crate::model::{Provider, ProviderSource, Query};
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;
use crate::template;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    pub provider: Query,
    pub source: ProviderSource,
    /// The text substituted into the template (before encoding).
    pub query_text: String,
    /// Whether the input started with a provider prefix.
    pub prefixed: bool,
}

/// Splits at the first whitespace. Leading whitespace of the remainder is dropped.
pub fn split_prefix(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((prefix, rest)) => (prefix, rest.trim_start()),
        None => (input, ""),
    }
}

pub struct QueryResolver<'a, S: ConfigStore> {
    registry: QueryRegistry<'a, S>,
}

impl<'a, S: ConfigStore> QueryResolver<'a, S> {
    pub fn new(registry: QueryRegistry<'a, S>) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, input: &str) -> Result<Resolution> {
        let (candidate, remainder) = split_prefix(input);

        if let Some(provider) = self.registry.find(candidate)? {
            debug!(prefix = candidate, "input matched provider prefix");
            return Ok(build(provider, remainder, true));
        }

        let default = self.registry.default_provider()?;
        let provider = self
            .registry
            .find(&default)?
            .ok_or(QueryDeckError::UnknownProvider(default))?;
        debug!(prefix = %provider.prefix(), "no prefix matched, using default provider");
        Ok(build(provider, input, false))
    }
}

fn build(provider: Provider, text: &str, prefixed: bool) -> Resolution {
    Resolution {
        url: template::expand(&provider.query.url_template, text),
        provider: provider.query,
        source: provider.source,
        query_text: text.to_string(),
        prefixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::providers::BuiltinProviders;
    use crate::store::memory::InMemoryStore;

    fn resolve_with(store: &InMemoryStore, builtins: &BuiltinProviders, input: &str) -> Resolution {
        QueryResolver::new(QueryRegistry::new(store, builtins))
            .resolve(input)
            .unwrap()
    }

    #[test]
    fn split_on_first_whitespace() {
        assert_eq!(split_prefix("g hello world"), ("g", "hello world"));
        assert_eq!(split_prefix("g"), ("g", ""));
        assert_eq!(split_prefix("g\thello"), ("g", "hello"));
        assert_eq!(split_prefix("g   spaced  out"), ("g", "spaced  out"));
        assert_eq!(split_prefix(""), ("", ""));
    }

    #[test]
    fn custom_prefix_builds_encoded_url() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::none();
        let registry = QueryRegistry::new(&store, &builtins);
        registry
            .create(Query::new("Example", "g", "https://example.com/?q={q}"))
            .unwrap();
        registry.set_default_provider("g").unwrap();

        let res = resolve_with(&store, &builtins, "g hello world");
        assert_eq!(res.url, "https://example.com/?q=hello%20world");
        assert_eq!(res.source, ProviderSource::Custom);
        assert!(res.prefixed);
    }

    #[test]
    fn builtin_prefix_matches() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();

        let res = resolve_with(&store, &builtins, "yt lofi beats");
        assert_eq!(
            res.url,
            "https://www.youtube.com/results?search_query=lofi%20beats"
        );
        assert_eq!(res.source, ProviderSource::BuiltIn);
        assert_eq!(res.query_text, "lofi beats");
    }

    #[test]
    fn prefix_alone_gives_empty_query() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();

        let res = resolve_with(&store, &builtins, "r");
        assert_eq!(res.url, "https://www.reddit.com/search?q=");
        assert!(res.prefixed);
    }

    #[test]
    fn unmatched_input_goes_whole_to_default() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();

        let res = resolve_with(&store, &builtins, "rust borrow checker");
        assert_eq!(res.url, "https://duckduckgo.com/?q=rust%20borrow%20checker");
        assert_eq!(res.provider.prefix, "d");
        assert_eq!(res.query_text, "rust borrow checker");
        assert!(!res.prefixed);
    }

    #[test]
    fn unmatched_input_uses_custom_default() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();
        let registry = QueryRegistry::new(&store, &builtins);
        registry
            .create(Query::new("Wiki", "w", "https://en.wikipedia.org/w/index.php?search={q}"))
            .unwrap();
        registry.set_default_provider("w").unwrap();

        let res = resolve_with(&store, &builtins, "what is rust");
        assert_eq!(
            res.url,
            "https://en.wikipedia.org/w/index.php?search=what%20is%20rust"
        );
        assert_eq!(res.source, ProviderSource::Custom);
    }

    #[test]
    fn unknown_default_is_an_error() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();
        config::save_default_provider(&store, "gone").unwrap();

        let result = QueryResolver::new(QueryRegistry::new(&store, &builtins)).resolve("hello");
        assert!(matches!(result, Err(QueryDeckError::UnknownProvider(p)) if p == "gone"));
    }

    #[test]
    fn empty_input_resolves_to_default_with_empty_query() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();

        let res = resolve_with(&store, &builtins, "");
        assert_eq!(res.url, "https://duckduckgo.com/?q=");
        assert!(!res.prefixed);
    }

    #[test]
    fn unprefixed_input_without_any_default_is_an_error() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::none();
        let registry = QueryRegistry::new(&store, &builtins);
        registry
            .create(Query::new("Example", "ex", "https://example.com/?q={q}"))
            .unwrap();

        let result = QueryResolver::new(QueryRegistry::new(&store, &builtins)).resolve("hello");
        assert!(matches!(result, Err(QueryDeckError::NoDefaultProvider)));

        // Prefixed input still resolves
        let res = resolve_with(&store, &builtins, "ex hello");
        assert_eq!(res.url, "https://example.com/?q=hello");
    }
}
