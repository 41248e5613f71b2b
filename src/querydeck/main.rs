use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use querydeck::api::{ConfigAction, Query, QueryDeckApi, QueryUpdate};
use querydeck::error::{QueryDeckError, Result};
use querydeck::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_messages, print_providers, print_settings};

const HOME_ENV: &str = "QUERYDECK_HOME";

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: QueryDeckApi<FileStore>,
}

fn run(cli: Cli) -> Result<()> {
    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Go { input, open }) => handle_go(&ctx, input, open),
        Some(Commands::List { all }) => handle_list(&ctx, all),
        Some(Commands::Add { name, prefix, url }) => handle_add(&ctx, name, prefix, url),
        Some(Commands::Update {
            prefix,
            name,
            new_prefix,
            url,
        }) => handle_update(&ctx, prefix, name, new_prefix, url),
        Some(Commands::Delete { prefix, yes }) => handle_delete(&ctx, prefix, yes),
        Some(Commands::Default { prefix }) => handle_default(&ctx, prefix),
        Some(Commands::Date { on }) => handle_date(&ctx, on),
        Some(Commands::Config { key, value, unset }) => handle_config(&ctx, key, value, unset),
        None => handle_list(&ctx, false),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        "warn,querydeck=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => ProjectDirs::from("com", "querydeck", "querydeck")
            .ok_or_else(|| QueryDeckError::Store("Could not determine data dir".into()))?
            .data_dir()
            .to_path_buf(),
    };
    debug!(path = %data_dir.display(), "using data dir");

    Ok(AppContext {
        api: QueryDeckApi::new(FileStore::new(data_dir)),
    })
}

fn handle_go(ctx: &AppContext, input: Vec<String>, open: bool) -> Result<()> {
    let input = input.join(" ");
    let result = ctx.api.resolve(&input)?;
    print_messages(&result.messages);

    if let Some(resolution) = result.resolution {
        if open {
            open::that(&resolution.url).map_err(QueryDeckError::Io)?;
        } else {
            println!("{}", resolution.url);
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, all: bool) -> Result<()> {
    let result = ctx.api.list_queries(all)?;
    print_providers(&result.listed_providers);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &AppContext, name: String, prefix: String, url: String) -> Result<()> {
    let result = ctx.api.create_query(Query::new(name, prefix, url))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &AppContext,
    prefix: String,
    name: Option<String>,
    new_prefix: Option<String>,
    url: Option<String>,
) -> Result<()> {
    let changes = QueryUpdate {
        name,
        prefix: new_prefix,
        url_template: url,
    };
    let result = ctx.api.update_query(&prefix, &changes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, prefix: String, yes: bool) -> Result<()> {
    let registry = ctx.api.registry();
    if registry.is_default(&prefix)? {
        return Err(QueryDeckError::CannotDeleteActiveProvider(prefix));
    }
    let query = registry
        .list()?
        .into_iter()
        .find(|q| q.prefix == prefix)
        .ok_or_else(|| QueryDeckError::QueryNotFound(prefix.clone()))?;

    if !yes {
        print!("Delete {} ({})? [y/N] ", query.name, query.prefix);
        io::stdout().flush().map_err(QueryDeckError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(QueryDeckError::Io)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_query(&prefix)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_default(ctx: &AppContext, prefix: Option<String>) -> Result<()> {
    let result = match prefix {
        Some(p) => ctx.api.set_default_provider(&p)?,
        None => ctx.api.default_provider()?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_date(ctx: &AppContext, on: Option<String>) -> Result<()> {
    let result = match on {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                QueryDeckError::InvalidDate(format!("'{}', expected YYYY-MM-DD", raw))
            })?;
            ctx.api.format_date(&date)?
        }
        None => ctx.api.format_date(&Local::now())?,
    };

    if let Some(formatted) = &result.formatted_date {
        println!("{}", formatted);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &AppContext,
    key: Option<String>,
    value: Option<String>,
    unset: bool,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), _) if unset => ConfigAction::Unset(k),
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    print_settings(&result.settings);
    print_messages(&result.messages);
    Ok(())
}
