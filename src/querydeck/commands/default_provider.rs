use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QueryDeckError, Result};
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;

pub fn show<S: ConfigStore>(registry: &QueryRegistry<'_, S>) -> Result<CmdResult> {
    let prefix = registry.default_provider()?;
    let provider = registry
        .find(&prefix)?
        .ok_or_else(|| QueryDeckError::UnknownProvider(prefix.clone()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Default search provider: {} ({})",
        provider.query.name, prefix
    )));
    Ok(result.with_affected_queries(vec![provider.query]))
}

pub fn set<S: ConfigStore>(registry: &QueryRegistry<'_, S>, prefix: &str) -> Result<CmdResult> {
    let provider = registry.set_default_provider(prefix)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Default search provider set to {} ({})",
        provider.query.name, prefix
    )));
    Ok(result.with_affected_queries(vec![provider.query]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::BuiltinProviders;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn shows_builtin_default() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();
        let registry = QueryRegistry::new(&store, &builtins);

        let result = show(&registry).unwrap();
        assert!(result.messages[0].content.contains("DuckDuckGo (d)"));
    }

    #[test]
    fn set_then_show() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();
        let registry = QueryRegistry::new(&store, &builtins);

        set(&registry, "sp").unwrap();
        let result = show(&registry).unwrap();
        assert_eq!(result.affected_queries[0].name, "Spotify");
    }

    #[test]
    fn set_unknown_fails() {
        let store = InMemoryStore::new();
        let builtins = BuiltinProviders::default();
        let registry = QueryRegistry::new(&store, &builtins);

        assert!(matches!(
            set(&registry, "zzz"),
            Err(QueryDeckError::UnknownProvider(_))
        ));
    }
}
