//! Terminal output for CLI commands.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Could not encode output: {e}")),
    }
}

/// Rows as a table, or as a JSON array.
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(rows),
        OutputFormat::Table if rows.is_empty() => println!("(none)"),
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }
}

/// A nested value. Tables cannot show nesting, so both formats print JSON.
pub fn print_item<T: Serialize>(item: &T) {
    print_json(item);
}

pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

pub fn print_warning(msg: &str) {
    eprintln!("! {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("error: {msg}");
}

/// One aligned `label: value` line.
pub fn print_kv(label: &str, value: &str) {
    let label = format!("{label}:");
    println!("  {label:<14}{value}");
}
