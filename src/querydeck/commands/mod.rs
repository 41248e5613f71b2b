//! # Command Layer
//!
//! One module per user-facing operation. Commands call into the engine
//! (registry, resolver, date formatter) and package the outcome as a [`CmdResult`]:
//! structured data plus [`CmdMessage`]s for the user.
//!
//! Commands never print, prompt, or navigate. Confirmation prompts and opening URLs
//! belong to the client.

use crate::config::SettingKey;
use crate::model::{ProviderSource, Query};
use crate::resolver::Resolution;

pub mod config;
pub mod create;
pub mod date;
pub mod default_provider;
pub mod delete;
pub mod list;
pub mod resolve;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A notification for the user: `{title, message}` where the title follows the level.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            MessageLevel::Info => "Info",
            MessageLevel::Success => "Success",
            MessageLevel::Warning => "Warning",
            MessageLevel::Error => "Error",
        }
    }
}

/// A provider as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedProvider {
    pub query: Query,
    pub source: ProviderSource,
    pub is_default: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_queries: Vec<Query>,
    pub listed_providers: Vec<ListedProvider>,
    pub resolution: Option<Resolution>,
    pub formatted_date: Option<String>,
    pub settings: Vec<(SettingKey, Option<String>)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_queries(mut self, queries: Vec<Query>) -> Self {
        self.affected_queries = queries;
        self
    }

    pub fn with_listed_providers(mut self, providers: Vec<ListedProvider>) -> Self {
        self.listed_providers = providers;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_formatted_date(mut self, date: String) -> Self {
        self.formatted_date = Some(date);
        self
    }

    pub fn with_settings(mut self, settings: Vec<(SettingKey, Option<String>)>) -> Self {
        self.settings = settings;
        self
    }
}

/// Field changes for `update`. Unset fields keep the current value.
#[derive(Debug, Clone, Default)]
pub struct QueryUpdate {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub url_template: Option<String>,
}

impl QueryUpdate {
    pub fn apply_to(&self, current: &Query) -> Query {
        Query {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            prefix: self.prefix.clone().unwrap_or_else(|| current.prefix.clone()),
            url_template: self
                .url_template
                .clone()
                .unwrap_or_else(|| current.url_template.clone()),
        }
    }
}
