use crate::commands::CmdResult;
use crate::date::DateTimeFormatter;
use crate::error::Result;
use crate::store::ConfigStore;
use chrono::Datelike;

pub fn run<S: ConfigStore, D: Datelike>(store: &S, now: &D) -> Result<CmdResult> {
    let formatter = DateTimeFormatter::from_store(store)?;
    Ok(CmdResult::default().with_formatted_date(formatter.format(now)))
}
