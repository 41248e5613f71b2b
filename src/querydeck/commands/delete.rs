use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;

/// Deletes without asking. Clients confirm with the user before calling this.
pub fn run<S: ConfigStore>(registry: &QueryRegistry<'_, S>, prefix: &str) -> Result<CmdResult> {
    let removed = registry.delete(prefix)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Search provider deleted: {} ({})",
        removed.name, removed.prefix
    )));
    Ok(result.with_affected_queries(vec![removed]))
}
