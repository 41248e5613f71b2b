use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::QueryRegistry;
use crate::resolver::QueryResolver;
use crate::store::ConfigStore;

pub fn run<S: ConfigStore>(registry: QueryRegistry<'_, S>, input: &str) -> Result<CmdResult> {
    let resolution = QueryResolver::new(registry).resolve(input)?;
    Ok(CmdResult::default().with_resolution(resolution))
}
