use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, FromArgMatches, ValueHint};
use serde_json::{Value, json};
use tracing::{debug, info};

use datatable_sort::cli;
use datatable_sort::components::{GridSortState, HeaderCell};
use datatable_sort::config::{self, Config, get_config_path};
use datatable_sort::models::{Column, SortList};
use datatable_sort::utils::columns::{JsonColumns, sort_rows};
use datatable_sort::utils::symbols::sort_indicator;
use datatable_sort::{errors, logging};

fn main() -> Result<()> {
    errors::init()?;

    // Enhance the help message for the config argument
    let def = get_config_path()?;
    let help = format!("Path to config file (default: {})", def.display());
    let cmd = cli::Args::command()
        .mut_arg("config", |a| a.help(help).value_hint(ValueHint::FilePath).next_line_help(true));
    let args = cli::Args::from_arg_matches(&cmd.get_matches())?;

    let config = config::Config::new(args.config)?;
    logging::init(&config)?;

    let mode = args.mode.unwrap_or(config.sort_type);
    let cycle = args.cycle.unwrap_or(config.sort_cycle);
    let mut state =
        GridSortState::new(mode, cycle).with_sorts(args.sorts.into_iter().collect::<SortList>());
    info!("start with mode={mode}, cycle={cycle}, sorts=[{}]", state.sorts());

    let mut events = Vec::with_capacity(args.triggers.len());
    for prop in &args.triggers {
        let column = resolve_column(&config, prop)?;
        match state.trigger(&column) {
            Some(event) => events.push(event),
            None => eprintln!("column `{prop}` is not sortable, trigger ignored"),
        }
    }

    let rows = match &args.rows {
        Some(path) => {
            let mut rows = load_rows(path)?;
            sort_rows(&mut rows, &JsonColumns, state.sorts());
            Some(rows)
        }
        None => None,
    };

    if args.json {
        let mut out = json!({ "sorts": state.sorts(), "events": events });
        if let Some(rows) = rows {
            out["rows"] = Value::Array(rows);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if state.sorts().is_empty() {
        println!("sorts: -");
    } else {
        println!("sorts: {}", state.sorts());
    }
    let mut settings = config.header_settings();
    settings.sort_type = mode;
    settings.sort_cycle = cycle;
    for column in header_columns(&config, &state) {
        let cell = HeaderCell::new(&column, state.sorts(), &settings);
        println!(
            "{}{}\t[{}]\t[{}]",
            cell.title().unwrap_or(&column.prop),
            sort_indicator(cell.sort_dir()),
            cell.css_classes(),
            cell.sort_class()
        );
    }
    if let Some(rows) = rows {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }

    Ok(())
}

/// Configured column for `prop`. Without configured columns any key is a plain sortable column.
fn resolve_column(config: &Config, prop: &str) -> Result<Column> {
    if config.columns.is_empty() {
        return Ok(Column::new(prop));
    }
    match config.column(prop) {
        Some(column) => Ok(column.clone()),
        None => bail!("unknown column `{prop}`, not declared in the config file"),
    }
}

fn header_columns(config: &Config, state: &GridSortState) -> Vec<Column> {
    if !config.columns.is_empty() {
        return config.columns.clone();
    }
    state.sorts().iter().map(|s| Column::new(s.prop.as_str())).collect()
}

fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Fail to read file `{}`", path.display()))?;
    let rows: Vec<Value> = serde_json::from_str(&content)
        .with_context(|| format!("Fail to parse rows in `{}`", path.display()))?;
    debug!("loaded {} rows from `{}`", rows.len(), path.display());
    Ok(rows)
}
