//! # Query Registry
//!
//! CRUD over the custom queries, on top of a [`ConfigStore`].
//!
//! Every mutation is all-or-nothing: the new query list is computed in memory,
//! validated, and written with a single store write (`set`, or `set_many` when the
//! default provider moves too). A failed validation or a failed write
//! leaves the persisted state exactly as it was.
//!
//! ## Prefix uniqueness
//!
//! A prefix identifies exactly one provider. Custom queries are unique among
//! themselves and may not take a built-in prefix either, so lookup order never
//! decides between two candidates.
//!
//! ## The default provider
//!
//! `defaultSearchProvider` must always point at an existing provider:
//! - deleting the current default is rejected with `CannotDeleteActiveProvider`;
//! - renaming the current default (changing its prefix through `update`) moves the
//!   default along with it;
//! - setting the default to an unknown prefix is rejected with `UnknownProvider`;
//! - with nothing stored, the catalog's fallback applies. A catalog without one
//!   reports `NoDefaultProvider` until a default is set.

use crate::config;
use crate::error::{QueryDeckError, Result};
use crate::model::{Provider, Query};
use crate::providers::BuiltinProviders;
use crate::store::ConfigStore;
use tracing::{debug, info};

pub struct QueryRegistry<'a, S: ConfigStore> {
    store: &'a S,
    builtins: &'a BuiltinProviders,
}

impl<'a, S: ConfigStore> QueryRegistry<'a, S> {
    pub fn new(store: &'a S, builtins: &'a BuiltinProviders) -> Self {
        Self { store, builtins }
    }

    pub fn store(&self) -> &'a S {
        self.store
    }

    pub fn builtins(&self) -> &'a BuiltinProviders {
        self.builtins
    }

    /// Custom queries in insertion order.
    pub fn list(&self) -> Result<Vec<Query>> {
        config::load_custom_queries(self.store)
    }

    /// Looks a prefix up among the built-ins first, then the custom queries.
    pub fn find(&self, prefix: &str) -> Result<Option<Provider>> {
        if let Some(q) = self.builtins.get(prefix) {
            return Ok(Some(Provider::builtin(q.clone())));
        }
        Ok(self
            .list()?
            .into_iter()
            .find(|q| q.prefix == prefix)
            .map(Provider::custom))
    }

    /// The stored default, else the catalog's fallback. `None` when neither exists.
    pub fn default_prefix(&self) -> Result<Option<String>> {
        Ok(config::load_default_provider(self.store)?
            .or_else(|| self.builtins.default_prefix().map(str::to_string)))
    }

    pub fn default_provider(&self) -> Result<String> {
        self.default_prefix()?.ok_or(QueryDeckError::NoDefaultProvider)
    }

    pub fn is_default(&self, prefix: &str) -> Result<bool> {
        Ok(self.default_prefix()?.as_deref() == Some(prefix))
    }

    pub fn set_default_provider(&self, prefix: &str) -> Result<Provider> {
        let provider = self
            .find(prefix)?
            .ok_or_else(|| QueryDeckError::UnknownProvider(prefix.to_string()))?;
        config::save_default_provider(self.store, prefix)?;
        info!(prefix, "default search provider changed");
        Ok(provider)
    }

    pub fn create(&self, query: Query) -> Result<Query> {
        query.validate()?;

        let mut queries = self.list()?;
        self.ensure_prefix_free(&query.prefix, &queries, None)?;

        queries.push(query.clone());
        config::save_custom_queries(self.store, &queries)?;

        info!(prefix = %query.prefix, name = %query.name, "query created");
        Ok(query)
    }

    /// Replaces the custom query currently registered under `prefix`.
    pub fn update(&self, prefix: &str, query: Query) -> Result<Query> {
        query.validate()?;

        let original = self.list()?;
        let position = original
            .iter()
            .position(|q| q.prefix == prefix)
            .ok_or_else(|| QueryDeckError::QueryNotFound(prefix.to_string()))?;
        self.ensure_prefix_free(&query.prefix, &original, Some(position))?;

        if original[position] == query {
            debug!(prefix, "update is a no-op");
            return Ok(query);
        }

        let mut queries = original;
        queries[position] = query.clone();

        let renamed = query.prefix != prefix;
        if renamed && self.is_default(prefix)? {
            let raw = config::encode_custom_queries(&queries)?;
            self.store.set_many(&[
                (config::KEY_CUSTOM_QUERIES, raw.as_str()),
                (config::KEY_DEFAULT_SEARCH_PROVIDER, query.prefix.as_str()),
            ])?;
            info!(from = prefix, to = %query.prefix, "default search provider followed rename");
        } else {
            config::save_custom_queries(self.store, &queries)?;
        }

        info!(prefix, new_prefix = %query.prefix, "query updated");
        Ok(query)
    }

    pub fn delete(&self, prefix: &str) -> Result<Query> {
        if self.is_default(prefix)? {
            return Err(QueryDeckError::CannotDeleteActiveProvider(
                prefix.to_string(),
            ));
        }

        let mut queries = self.list()?;
        let position = queries
            .iter()
            .position(|q| q.prefix == prefix)
            .ok_or_else(|| QueryDeckError::QueryNotFound(prefix.to_string()))?;

        let removed = queries.remove(position);
        config::save_custom_queries(self.store, &queries)?;

        info!(prefix, "query deleted");
        Ok(removed)
    }

    fn ensure_prefix_free(
        &self,
        prefix: &str,
        queries: &[Query],
        skip: Option<usize>,
    ) -> Result<()> {
        let taken_by_custom = queries
            .iter()
            .enumerate()
            .any(|(i, q)| Some(i) != skip && q.prefix == prefix);

        if taken_by_custom || self.builtins.contains(prefix) {
            return Err(QueryDeckError::DuplicatePrefix(prefix.to_string()));
        }
        Ok(())
    }
}
