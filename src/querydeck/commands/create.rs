use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Query;
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;

pub fn run<S: ConfigStore>(registry: &QueryRegistry<'_, S>, query: Query) -> Result<CmdResult> {
    let created = registry.create(query)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Search provider added: {} ({})",
        created.name, created.prefix
    )));
    Ok(result.with_affected_queries(vec![created]))
}
