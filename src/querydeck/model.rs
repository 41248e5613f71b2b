//! Core data types: [`Query`] and the [`Provider`] view the resolver works with.

use crate::error::{QueryDeckError, Result};
use crate::template;
use serde::{Deserialize, Serialize};

/// A user-defined search provider.
///
/// Persisted as `{name, prefix, url}` inside the `customQueries` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub name: String,
    pub prefix: String,
    #[serde(rename = "url")]
    pub url_template: String,
}

impl Query {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            url_template: url_template.into(),
        }
    }

    /// Checks the shape of a single query. Uniqueness is the registry's job.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(QueryDeckError::InvalidQuery(
                "Name cannot be empty".to_string(),
            ));
        }

        if self.prefix.is_empty() {
            return Err(QueryDeckError::InvalidQuery(
                "Prefix cannot be empty".to_string(),
            ));
        }

        // The resolver splits input on whitespace, so such a prefix could never match.
        if self.prefix.chars().any(char::is_whitespace) {
            return Err(QueryDeckError::InvalidQuery(format!(
                "Prefix cannot contain whitespace: '{}'",
                self.prefix
            )));
        }

        template::validate(&self.url_template)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderSource {
    BuiltIn,
    Custom,
}

/// A query together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub query: Query,
    pub source: ProviderSource,
}

impl Provider {
    pub fn builtin(query: Query) -> Self {
        Self {
            query,
            source: ProviderSource::BuiltIn,
        }
    }

    pub fn custom(query: Query) -> Self {
        Self {
            query,
            source: ProviderSource::Custom,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.query.prefix
    }
}
