//! Table and JSON output for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use dataprep_core::config::AppConfig;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print one repository object as a single-row table or as JSON
pub fn print_row<T: Serialize + Tabled>(row: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new([row])),
        OutputFormat::Json => print_json(row),
    }
}

/// Print the effective configuration
pub fn print_config(config: &AppConfig, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(config);
        return;
    }

    let server = &config.server;
    println!("[server]");
    print_kv("endpoint", &server.browser_url());
    print_kv("repository_id", &server.repository_id);
    print_kv("request_timeout", &format!("{}s", server.request_timeout_seconds));
    println!("[logging]");
    print_kv("level", &config.logging.level);
    print_kv("format", &config.logging.format);
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Cannot render JSON: {e}")),
    }
}

fn print_kv(key: &str, value: &str) {
    println!("  {:<20} {}", format!("{key}:"), value);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
