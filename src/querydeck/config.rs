//! # Configuration
//!
//! Settings are persisted through a [`ConfigStore`] under fixed key names. The key
//! names are an external contract shared with whatever else reads the same store.
//!
//! | Key | Format | Default |
//! |-----|--------|---------|
//! | `customQueries` | JSON array of `{name, prefix, url}` | `[]` |
//! | `defaultSearchProvider` | provider prefix | `d` (DuckDuckGo) |
//! | `daySchema` | 7 names joined by `;`, Sunday first | English names |
//! | `monthSchema` | 12 names joined by `;`, January first | English names |
//! | `useAmericanDate` | `"true"` enables month-first order | false |
//!
//! `customQueries` is managed by the registry only. The other keys are exposed as
//! [`SettingKey`]s for `querydeck config`.

use crate::error::{QueryDeckError, Result};
use crate::model::Query;
use crate::store::ConfigStore;
use std::fmt;
use std::str::FromStr;

pub const KEY_CUSTOM_QUERIES: &str = "customQueries";
pub const KEY_DEFAULT_SEARCH_PROVIDER: &str = "defaultSearchProvider";
pub const KEY_DAY_SCHEMA: &str = "daySchema";
pub const KEY_MONTH_SCHEMA: &str = "monthSchema";
pub const KEY_USE_AMERICAN_DATE: &str = "useAmericanDate";

pub const SCHEMA_SEPARATOR: char = ';';

pub fn load_custom_queries<S: ConfigStore>(store: &S) -> Result<Vec<Query>> {
    match store.get(KEY_CUSTOM_QUERIES)? {
        Some(raw) if !raw.trim().is_empty() => {
            let queries: Vec<Query> =
                serde_json::from_str(&raw).map_err(QueryDeckError::Serialization)?;
            Ok(queries)
        }
        _ => Ok(Vec::new()),
    }
}

pub fn encode_custom_queries(queries: &[Query]) -> Result<String> {
    serde_json::to_string(queries).map_err(QueryDeckError::Serialization)
}

pub fn save_custom_queries<S: ConfigStore>(store: &S, queries: &[Query]) -> Result<()> {
    store.set(KEY_CUSTOM_QUERIES, &encode_custom_queries(queries)?)
}

/// The stored default prefix. `None` when unset or empty; the built-in catalog
/// supplies the fallback.
pub fn load_default_provider<S: ConfigStore>(store: &S) -> Result<Option<String>> {
    Ok(store
        .get(KEY_DEFAULT_SEARCH_PROVIDER)?
        .filter(|p| !p.is_empty()))
}

pub fn save_default_provider<S: ConfigStore>(store: &S, prefix: &str) -> Result<()> {
    store.set(KEY_DEFAULT_SEARCH_PROVIDER, prefix)
}

/// Raw date settings as persisted. Validation happens in the formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSettings {
    pub day_schema: Option<String>,
    pub month_schema: Option<String>,
    pub use_american_date: bool,
}

impl DateSettings {
    pub fn load<S: ConfigStore>(store: &S) -> Result<Self> {
        Ok(Self {
            day_schema: store.get(KEY_DAY_SCHEMA)?,
            month_schema: store.get(KEY_MONTH_SCHEMA)?,
            use_american_date: store.get(KEY_USE_AMERICAN_DATE)?.as_deref() == Some("true"),
        })
    }
}

/// User-editable settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    DaySchema,
    MonthSchema,
    UseAmericanDate,
    DefaultSearchProvider,
}

impl SettingKey {
    pub fn all() -> &'static [SettingKey] {
        &[
            SettingKey::DefaultSearchProvider,
            SettingKey::DaySchema,
            SettingKey::MonthSchema,
            SettingKey::UseAmericanDate,
        ]
    }

    /// The persisted key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::DaySchema => KEY_DAY_SCHEMA,
            SettingKey::MonthSchema => KEY_MONTH_SCHEMA,
            SettingKey::UseAmericanDate => KEY_USE_AMERICAN_DATE,
            SettingKey::DefaultSearchProvider => KEY_DEFAULT_SEARCH_PROVIDER,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = QueryDeckError;

    /// Accepts the persisted camelCase name or a kebab-case spelling.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daySchema" | "day-schema" => Ok(SettingKey::DaySchema),
            "monthSchema" | "month-schema" => Ok(SettingKey::MonthSchema),
            "useAmericanDate" | "use-american-date" => Ok(SettingKey::UseAmericanDate),
            "defaultSearchProvider" | "default-search-provider" => {
                Ok(SettingKey::DefaultSearchProvider)
            }
            other => Err(QueryDeckError::UnknownSetting(other.to_string())),
        }
    }
}
