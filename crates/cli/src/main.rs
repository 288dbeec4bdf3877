//! `gridkit` binary: load a JSON dataset and browse it in the terminal
//! data grid.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use indexmap::IndexSet;
use serde_json::{Value, json};
use tracing::Level;

use gridkit_tui::app::{App, CommandSink, GridCommand};
use gridkit_types::{Column, ConfirmationConfig, FilterConfig, PaginationConfig, RowAction, Severity, TableConfig};

#[derive(Debug, Parser)]
#[command(name = "gridkit", about = "Browse JSON datasets in a terminal data grid")]
struct Cli {
    /// Path to a JSON file containing an array of objects. Falls back to a
    /// built-in sample dataset.
    #[arg(long)]
    data: Option<String>,

    /// Rows per page.
    #[arg(long, default_value_t = 8)]
    page_size: usize,

    /// Disable pagination and show every row on one page.
    #[arg(long)]
    no_pagination: bool,

    /// Comma-separated field names to search; defaults to every column.
    #[arg(long, value_delimiter = ',')]
    search_keys: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let records = match &cli.data {
        Some(path) => load_records(path)?,
        None => sample_records(),
    };
    let columns = infer_columns(&records);
    if columns.is_empty() {
        bail!("dataset has no object fields to display");
    }

    let sink: CommandSink = Arc::default();
    let config = table_config(&columns, &sink);
    config.validate().context("invalid table configuration")?;

    let search_keys = if cli.search_keys.is_empty() {
        columns.clone()
    } else {
        cli.search_keys.clone()
    };
    let filter = FilterConfig::keys(search_keys);
    let pagination = PaginationConfig {
        enabled: !cli.no_pagination,
        page_size: cli.page_size,
    };

    let app = App::new(records, config, filter, pagination, sink);
    gridkit_tui::run(app)
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

fn load_records(path: &str) -> Result<Vec<Value>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let parsed: Value = serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;
    match parsed {
        Value::Array(rows) => Ok(rows),
        _ => bail!("{path} must contain a top-level JSON array"),
    }
}

/// Column keys in first-seen order across the rows, sampled like any other
/// schema sniffing: the first 50 rows decide.
fn infer_columns(records: &[Value]) -> Vec<String> {
    let mut keys: IndexSet<String> = IndexSet::new();
    for row in records.iter().take(50) {
        if let Value::Object(map) = row {
            keys.extend(map.keys().cloned());
        }
    }
    keys.into_iter().collect()
}

fn table_config(columns: &[String], sink: &CommandSink) -> TableConfig<Value> {
    let columns = columns
        .iter()
        .map(|key| Column::new(key.clone(), humanize(key)).sortable(true))
        .collect();

    let inspect_sink = sink.clone();
    let delete_sink = sink.clone();
    TableConfig::new(columns)
        .actions(vec![
            RowAction::new("Inspect", move |row: &Value, _| {
                inspect_sink.lock().unwrap().push(GridCommand::Inspect(row.clone()));
            })
            .icon("👁"),
            RowAction::new("Delete", move |row: &Value, _| {
                delete_sink.lock().unwrap().push(GridCommand::Remove(row.clone()));
            })
            .icon("✖")
            .with_confirmation(ConfirmationConfig::new(
                "Delete Record",
                "Are you sure you want to delete this record? This action cannot be undone.",
                Severity::Danger,
            )),
        ])
        .actions_label("Actions")
}

/// `order_id` -> `Order id`.
fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

fn sample_records() -> Vec<Value> {
    json!([
        {"order_id": "ORD-2501", "customer": "Ada Lovelace", "date": "2026-07-02", "amount": 126.50, "status": "delivered"},
        {"order_id": "ORD-2502", "customer": "Grace Hopper", "date": "2026-07-04", "amount": 89.00, "status": "pending"},
        {"order_id": "ORD-2503", "customer": "Alan Turing", "date": "2026-07-05", "amount": 42.75, "status": "shipped"},
        {"order_id": "ORD-2504", "customer": "Edsger Dijkstra", "date": "2026-07-09", "amount": 310.20, "status": "delivered"},
        {"order_id": "ORD-2505", "customer": "Barbara Liskov", "date": "2026-07-11", "amount": 57.10, "status": "pending"},
        {"order_id": "ORD-2506", "customer": "Donald Knuth", "date": "2026-07-14", "amount": 198.99, "status": "delivered"},
        {"order_id": "ORD-2507", "customer": "Radia Perlman", "date": "2026-07-18", "amount": 23.40, "status": "shipped"},
        {"order_id": "ORD-2508", "customer": "Tony Hoare", "date": "2026-07-21", "amount": 75.00, "status": "pending"},
        {"order_id": "ORD-2509", "customer": "Frances Allen", "date": "2026-07-25", "amount": 144.60, "status": "delivered"},
        {"order_id": "ORD-2510", "customer": "Ken Thompson", "date": "2026-07-29", "amount": 61.35, "status": "shipped"}
    ])
    .as_array()
    .cloned()
    .unwrap_or_default()
}
