use crate::commands::{CmdMessage, CmdResult, QueryUpdate};
use crate::error::{QueryDeckError, Result};
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;

pub fn run<S: ConfigStore>(
    registry: &QueryRegistry<'_, S>,
    prefix: &str,
    changes: &QueryUpdate,
) -> Result<CmdResult> {
    let current = registry
        .list()?
        .into_iter()
        .find(|q| q.prefix == prefix)
        .ok_or_else(|| QueryDeckError::QueryNotFound(prefix.to_string()))?;

    let was_default = registry.is_default(prefix)?;
    let updated = registry.update(prefix, changes.apply_to(&current))?;

    let mut result = CmdResult::default();
    if updated == current {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for {}",
            prefix
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Search provider updated: {} ({})",
            updated.name, updated.prefix
        )));
        if was_default && updated.prefix != prefix {
            result.add_message(CmdMessage::info(format!(
                "Default search provider is now {}",
                updated.prefix
            )));
        }
    }
    Ok(result.with_affected_queries(vec![updated]))
}
