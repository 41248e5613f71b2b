use crate::commands::{CmdMessage, CmdResult};
use crate::config::{SettingKey, SCHEMA_SEPARATOR};
use crate::date::{parse_schema, DEFAULT_DAYS, DEFAULT_MONTHS};
use crate::error::{QueryDeckError, Result};
use crate::registry::QueryRegistry;
use crate::store::ConfigStore;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    Unset(String),
}

pub fn run<S: ConfigStore>(
    registry: &QueryRegistry<'_, S>,
    action: ConfigAction,
) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let mut settings = Vec::new();
            for key in SettingKey::all() {
                settings.push((*key, current_value(registry, *key)?));
            }
            Ok(CmdResult::default().with_settings(settings))
        }
        ConfigAction::ShowKey(name) => {
            let key = match name.parse::<SettingKey>() {
                Ok(key) => key,
                Err(e) => return Ok(error_result(e)),
            };
            let value = current_value(registry, key)?;
            Ok(CmdResult::default().with_settings(vec![(key, value)]))
        }
        ConfigAction::Set(name, value) => {
            let key = match name.parse::<SettingKey>() {
                Ok(key) => key,
                Err(e) => return Ok(error_result(e)),
            };
            let stored = match set_value(registry, key, &value) {
                Ok(stored) => stored,
                Err(e @ QueryDeckError::Io(_))
                | Err(e @ QueryDeckError::Serialization(_))
                | Err(e @ QueryDeckError::Store(_)) => return Err(e),
                Err(e) => return Ok(error_result(e)),
            };

            let mut result =
                CmdResult::default().with_settings(vec![(key, Some(stored.clone()))]);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            Ok(result)
        }
        ConfigAction::Unset(name) => {
            let key = match name.parse::<SettingKey>() {
                Ok(key) => key,
                Err(e) => return Ok(error_result(e)),
            };
            let no_fallback = registry.builtins().default_prefix().is_none();
            if key == SettingKey::DefaultSearchProvider && no_fallback {
                return Ok(error_result(QueryDeckError::InvalidSetting(format!(
                    "{} has no built-in fallback; choose another provider instead",
                    key
                ))));
            }
            registry.store().remove(key.as_str())?;

            let value = current_value(registry, key)?;
            let mut result = CmdResult::default().with_settings(vec![(key, value)]);
            result.add_message(CmdMessage::success(format!("{} reset to default", key)));
            Ok(result)
        }
    }
}

fn error_result(e: QueryDeckError) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(e.to_string()));
    result
}

/// Stored value; the default provider always reports its effective prefix.
fn current_value<S: ConfigStore>(
    registry: &QueryRegistry<'_, S>,
    key: SettingKey,
) -> Result<Option<String>> {
    match key {
        SettingKey::DefaultSearchProvider => registry.default_prefix(),
        _ => registry.store().get(key.as_str()),
    }
}

/// Validates, normalizes and persists a value. Returns what was stored.
fn set_value<S: ConfigStore>(
    registry: &QueryRegistry<'_, S>,
    key: SettingKey,
    value: &str,
) -> Result<String> {
    let store = registry.store();
    let normalized = match key {
        SettingKey::DaySchema => join_schema(parse_schema(value, DEFAULT_DAYS.len())?),
        SettingKey::MonthSchema => join_schema(parse_schema(value, DEFAULT_MONTHS.len())?),
        SettingKey::UseAmericanDate => value
            .trim()
            .parse::<bool>()
            .map_err(|_| {
                QueryDeckError::InvalidSetting(format!(
                    "{} expects true or false, got '{}'",
                    key, value
                ))
            })?
            .to_string(),
        SettingKey::DefaultSearchProvider => {
            let prefix = value.trim();
            registry.set_default_provider(prefix)?;
            return Ok(prefix.to_string());
        }
    };

    store.set(key.as_str(), &normalized)?;
    Ok(normalized)
}

fn join_schema(names: Vec<String>) -> String {
    names.join(&SCHEMA_SEPARATOR.to_string())
}
