//! Dashboard date line, e.g. `Monday, 1 January 2024`.
//!
//! Day and month names come from the `daySchema` / `monthSchema` settings when they
//! are well formed (7 and 12 non-empty names), otherwise from the English defaults.
//! A malformed schema is never an error here, only a debug log.

use crate::config::{DateSettings, SCHEMA_SEPARATOR};
use crate::error::{QueryDeckError, Result};
use crate::store::ConfigStore;
use chrono::Datelike;
use tracing::debug;

pub const DEFAULT_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const DEFAULT_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Splits a `;`-joined schema and checks it has exactly `expected` non-empty names.
pub fn parse_schema(raw: &str, expected: usize) -> Result<Vec<String>> {
    let names: Vec<String> = raw
        .split(SCHEMA_SEPARATOR)
        .map(|s| s.trim().to_string())
        .collect();

    if names.len() != expected {
        return Err(QueryDeckError::MalformedSchema(format!(
            "expected {} names, found {}",
            expected,
            names.len()
        )));
    }
    if let Some(i) = names.iter().position(|n| n.is_empty()) {
        return Err(QueryDeckError::MalformedSchema(format!(
            "name #{} is empty",
            i + 1
        )));
    }
    Ok(names)
}

fn schema_or_default(raw: Option<&str>, defaults: &[&str], kind: &str) -> Vec<String> {
    let fallback = || defaults.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    match raw {
        None => fallback(),
        Some(raw) => parse_schema(raw, defaults.len()).unwrap_or_else(|e| {
            debug!(kind, error = %e, "ignoring malformed schema");
            fallback()
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatter {
    days: Vec<String>,
    months: Vec<String>,
    american: bool,
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        Self::new(None, None, false)
    }
}

impl DateTimeFormatter {
    pub fn new(day_schema: Option<&str>, month_schema: Option<&str>, american: bool) -> Self {
        Self {
            days: schema_or_default(day_schema, &DEFAULT_DAYS, "daySchema"),
            months: schema_or_default(month_schema, &DEFAULT_MONTHS, "monthSchema"),
            american,
        }
    }

    pub fn from_settings(settings: &DateSettings) -> Self {
        Self::new(
            settings.day_schema.as_deref(),
            settings.month_schema.as_deref(),
            settings.use_american_date,
        )
    }

    pub fn from_store<S: ConfigStore>(store: &S) -> Result<Self> {
        Ok(Self::from_settings(&DateSettings::load(store)?))
    }

    pub fn format<D: Datelike>(&self, date: &D) -> String {
        let weekday = &self.days[date.weekday().num_days_from_sunday() as usize];
        let month = &self.months[date.month0() as usize];

        if self.american {
            format!("{}, {} {} {}", weekday, month, date.day(), date.year())
        } else {
            format!("{}, {} {} {}", weekday, date.day(), month, date.year())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_DAY_SCHEMA, KEY_USE_AMERICAN_DATE};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn new_year_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn day_first_by_default() {
        let formatter = DateTimeFormatter::default();
        assert_eq!(formatter.format(&new_year_2024()), "Monday, 1 January 2024");
    }

    #[test]
    fn american_puts_month_first() {
        let formatter = DateTimeFormatter::new(None, None, true);
        assert_eq!(formatter.format(&new_year_2024()), "Monday, January 1 2024");
    }

    #[test]
    fn custom_schemas_are_used() {
        let formatter = DateTimeFormatter::new(
            Some("Niedziela;Poniedziałek;Wtorek;Środa;Czwartek;Piątek;Sobota"),
            Some("Styczeń;Luty;Marzec;Kwiecień;Maj;Czerwiec;Lipiec;Sierpień;Wrzesień;Październik;Listopad;Grudzień"),
            false,
        );
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(formatter.format(&date), "Niedziela, 31 Grudzień 2023");
    }

    #[test]
    fn malformed_schema_falls_back_to_english() {
        let formatter = DateTimeFormatter::new(Some("Mon;Tue"), Some(""), false);
        assert_eq!(formatter.format(&new_year_2024()), "Monday, 1 January 2024");

        // Right count but an empty entry
        let formatter = DateTimeFormatter::new(Some("a;b;;d;e;f;g"), None, false);
        assert_eq!(formatter.format(&new_year_2024()), "Monday, 1 January 2024");
    }

    #[test]
    fn parse_schema_reports_problems() {
        assert!(matches!(
            parse_schema("a;b;c", 7),
            Err(QueryDeckError::MalformedSchema(msg)) if msg.contains("found 3")
        ));
        assert_eq!(parse_schema(" a ; b ", 2).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn reads_settings_from_store() {
        let store = InMemoryStore::new();
        store
            .set(KEY_DAY_SCHEMA, "Sun;Mon;Tue;Wed;Thu;Fri;Sat")
            .unwrap();
        store.set(KEY_USE_AMERICAN_DATE, "true").unwrap();

        let formatter = DateTimeFormatter::from_store(&store).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(formatter.format(&date), "Thu, July 4 2024");
    }

    #[test]
    fn works_with_datetimes() {
        let dt = new_year_2024().and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(
            DateTimeFormatter::default().format(&dt),
            "Monday, 1 January 2024"
        );
    }
}
