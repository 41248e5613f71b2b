use colored::*;
use querydeck::api::{CmdMessage, ListedProvider, MessageLevel};
use querydeck::config::SettingKey;
use querydeck::model::ProviderSource;
use unicode_width::UnicodeWidthStr;

const DEFAULT_MARKER: &str = "★";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => {
                println!("{}", format!("{}: {}", message.title(), message.content).yellow())
            }
            MessageLevel::Error => {
                eprintln!("{}", format!("{}: {}", message.title(), message.content).red())
            }
        }
    }
}

pub(crate) fn print_providers(providers: &[ListedProvider]) {
    if providers.is_empty() {
        return;
    }

    let prefix_width = providers
        .iter()
        .map(|p| p.query.prefix.width())
        .max()
        .unwrap_or(0);
    let name_width = providers
        .iter()
        .map(|p| p.query.name.width())
        .max()
        .unwrap_or(0);

    for p in providers {
        let marker = if p.is_default {
            format!("{} ", DEFAULT_MARKER).yellow()
        } else {
            "  ".normal()
        };

        let prefix = &p.query.prefix;
        let prefix_pad = " ".repeat(prefix_width.saturating_sub(prefix.width()));
        let name = &p.query.name;
        let name_pad = " ".repeat(name_width.saturating_sub(name.width()));

        let prefix_colored = match p.source {
            ProviderSource::BuiltIn => prefix.cyan(),
            ProviderSource::Custom => prefix.yellow(),
        };

        println!(
            "{}{}{}  {}{}  {}",
            marker,
            prefix_colored,
            prefix_pad,
            name.bold(),
            name_pad,
            p.query.url_template.dimmed()
        );
    }
}

pub(crate) fn print_settings(settings: &[(SettingKey, Option<String>)]) {
    for (key, value) in settings {
        match value {
            Some(v) => println!("{} = {}", key, v),
            None => println!("{} = {}", key, "(default)".dimmed()),
        }
    }
}
