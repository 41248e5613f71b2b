//! # API Facade
//!
//! The single entry point for clients. Every method builds a [`QueryRegistry`] over
//! the owned store and hands off to the matching command in `commands/*.rs`.
//!
//! `QueryDeckApi<S: ConfigStore>` is generic over storage:
//! - Production: `QueryDeckApi<FileStore>`
//! - Testing: `QueryDeckApi<InMemoryStore>`
//!
//! No business logic lives here, and nothing here prints.

use crate::commands;
use crate::error::Result;
use crate::providers::BuiltinProviders;
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;
use chrono::Datelike;

pub struct QueryDeckApi<S: ConfigStore> {
    store: S,
    builtins: BuiltinProviders,
}

impl<S: ConfigStore> QueryDeckApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_builtins(store, BuiltinProviders::default())
    }

    pub fn with_builtins(store: S, builtins: BuiltinProviders) -> Self {
        Self { store, builtins }
    }

    pub fn registry(&self) -> QueryRegistry<'_, S> {
        QueryRegistry::new(&self.store, &self.builtins)
    }

    pub fn list_queries(&self, include_builtins: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.registry(), include_builtins)
    }

    pub fn create_query(&self, query: Query) -> Result<commands::CmdResult> {
        commands::create::run(&self.registry(), query)
    }

    pub fn update_query(
        &self,
        prefix: &str,
        changes: &commands::QueryUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&self.registry(), prefix, changes)
    }

    pub fn delete_query(&self, prefix: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.registry(), prefix)
    }

    pub fn resolve(&self, input: &str) -> Result<commands::CmdResult> {
        commands::resolve::run(self.registry(), input)
    }

    pub fn default_provider(&self) -> Result<commands::CmdResult> {
        commands::default_provider::show(&self.registry())
    }

    pub fn set_default_provider(&self, prefix: &str) -> Result<commands::CmdResult> {
        commands::default_provider::set(&self.registry(), prefix)
    }

    pub fn format_date<D: Datelike>(&self, now: &D) -> Result<commands::CmdResult> {
        commands::date::run(&self.store, now)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.registry(), action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::model::Query;
pub use commands::{CmdMessage, CmdResult, ListedProvider, MessageLevel, QueryUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryDeckError;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn api() -> QueryDeckApi<InMemoryStore> {
        QueryDeckApi::new(InMemoryStore::new())
    }

    #[test]
    fn create_then_list() {
        let api = api();
        api.create_query(Query::new("Crates", "cr", "https://crates.io/search?q={q}"))
            .unwrap();

        let result = api.list_queries(false).unwrap();
        assert_eq!(result.listed_providers.len(), 1);
        assert_eq!(result.listed_providers[0].query.prefix, "cr");
    }

    #[test]
    fn resolve_dispatches_to_resolver() {
        let api = api();
        api.create_query(Query::new("Crates", "cr", "https://crates.io/search?q={q}"))
            .unwrap();

        let result = api.resolve("cr serde json").unwrap();
        assert_eq!(
            result.resolution.unwrap().url,
            "https://crates.io/search?q=serde%20json"
        );
    }

    #[test]
    fn delete_default_is_refused() {
        let api = api();
        api.create_query(Query::new("Crates", "cr", "https://crates.io/search?q={q}"))
            .unwrap();
        api.set_default_provider("cr").unwrap();

        assert!(matches!(
            api.delete_query("cr"),
            Err(QueryDeckError::CannotDeleteActiveProvider(_))
        ));
        assert_eq!(api.list_queries(false).unwrap().listed_providers.len(), 1);
    }

    #[test]
    fn update_dispatches_changes() {
        let api = api();
        api.create_query(Query::new("Crates", "cr", "https://crates.io/search?q={q}"))
            .unwrap();

        let changes = QueryUpdate {
            url_template: Some("https://lib.rs/search?q={q}".to_string()),
            ..Default::default()
        };
        let result = api.update_query("cr", &changes).unwrap();
        assert_eq!(
            result.affected_queries[0].url_template,
            "https://lib.rs/search?q={q}"
        );
    }

    #[test]
    fn format_date_uses_store() {
        let api = api();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = api.format_date(&date).unwrap();
        assert_eq!(result.formatted_date.unwrap(), "Monday, 1 January 2024");
    }

    #[test]
    fn custom_only_catalog() {
        let api = QueryDeckApi::with_builtins(InMemoryStore::new(), BuiltinProviders::none());
        api.create_query(Query::new("Example", "g", "https://example.com/?q={q}"))
            .unwrap();
        api.set_default_provider("g").unwrap();

        let result = api.resolve("g hello world").unwrap();
        assert_eq!(
            result.resolution.unwrap().url,
            "https://example.com/?q=hello%20world"
        );

        let result = api.resolve("hello world").unwrap();
        assert_eq!(
            result.resolution.unwrap().url,
            "https://example.com/?q=hello%20world"
        );
    }
}
