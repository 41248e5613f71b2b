use crate::commands::{CmdMessage, CmdResult, ListedProvider};
use crate::error::Result;
use crate::model::ProviderSource;
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;

/// Lists custom queries in insertion order, optionally preceded by the built-ins.
pub fn run<S: ConfigStore>(
    registry: &QueryRegistry<'_, S>,
    include_builtins: bool,
) -> Result<CmdResult> {
    let default = registry.default_prefix()?;
    let is_default = |prefix: &str| default.as_deref() == Some(prefix);
    let mut listed = Vec::new();

    if include_builtins {
        for q in registry.builtins().iter() {
            listed.push(ListedProvider {
                is_default: is_default(&q.prefix),
                query: q.clone(),
                source: ProviderSource::BuiltIn,
            });
        }
    }

    for q in registry.list()? {
        listed.push(ListedProvider {
            is_default: is_default(&q.prefix),
            query: q,
            source: ProviderSource::Custom,
        });
    }

    let mut result = CmdResult::default().with_listed_providers(listed);
    match &default {
        Some(prefix) if registry.find(prefix)?.is_none() => {
            result.add_message(CmdMessage::warning(format!(
                "Default search provider {} no longer exists. Pick another with `querydeck default <prefix>`.",
                prefix
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(
                "No default search provider. Pick one with `querydeck default <prefix>`.",
            ));
        }
        _ => {}
    }
    if result.listed_providers.is_empty() {
        result.add_message(CmdMessage::info(
            "No custom search providers. Add one with `querydeck add <name> <prefix> <url>`.",
        ));
    }
    Ok(result)
}
