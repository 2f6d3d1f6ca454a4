//! odata-query: inspect OData-style query strings from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Parse a URL and print the description
//! odata-query 'https://example.com/users?$filter=age gt 20&$top=10'
//!
//! # As JSON, with bare keys
//! odata-query 'https://example.com/users?top=10' --no-prefix --format json
//!
//! # Per-field breakdown
//! odata-query explain 'https://example.com/users?$orderby=name desc'
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use odata_query::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "odata-query")]
#[command(version)]
#[command(about = "Decompose OData-style query strings into typed clauses", long_about = None)]
#[command(after_help = "EXAMPLES:
    odata-query 'https://example.com/users?$select=name,age&$top=10'
    odata-query 'https://example.com/users?filter=age gt 20' --no-prefix
    odata-query render 'https://example.com/users?$orderby=name%20desc'")]
struct Cli {
    /// The URL to parse
    url: Option<String>,

    /// Keys are written without the `$` prefix (select, filter, ...)
    #[arg(long)]
    no_prefix: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Configuration file (defaults to ./odata-query.toml, then the user config dir)
    #[arg(short, long, env = "ODATA_QUERY_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliFormat {
    Table,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show every field with literal types
    Explain {
        /// The URL to explain
        url: String,
    },
    /// Print the canonical query string
    Render {
        /// The URL to render
        url: String,
    },
    /// Show the recognized keys
    Keys,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let use_prefix = config.parser.use_prefix && !cli.no_prefix;
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);

    match &cli.command {
        Some(Commands::Explain { url }) => explain(url, use_prefix),
        Some(Commands::Render { url }) => render(url, use_prefix),
        Some(Commands::Keys) => {
            show_keys();
            Ok(())
        }
        None => match &cli.url {
            Some(url) => print_query(url, use_prefix, format),
            None => {
                println!("{}", "odata-query".cyan().bold());
                println!();
                println!("Usage: odata-query <URL> [OPTIONS]");
                println!();
                println!("Try: odata-query --help");
                Ok(())
            }
        },
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::discover().context("Failed to load config"),
    }
}

fn parse_url(url: &str, use_prefix: bool) -> anyhow::Result<Option<QueryDescription>> {
    parse_with_prefix(url, use_prefix).with_context(|| format!("Could not parse '{}'", url))
}

fn print_query(url: &str, use_prefix: bool, format: OutputFormat) -> anyhow::Result<()> {
    let query = parse_url(url, use_prefix)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&query)?);
        }
        OutputFormat::Table => match query {
            Some(query) => print_table(&query),
            None => println!("{}", "(no query)".dimmed()),
        },
    }
    Ok(())
}

fn print_table(query: &QueryDescription) {
    let rows = [
        ("select", query.select().join(", ")),
        ("count", display_option(query.count())),
        ("top", display_option(query.top())),
        ("skip", display_option(query.skip())),
        (
            "orderby",
            query
                .order_by()
                .iter()
                .map(|c| format!("{} {}", c.property(), c.direction()))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        (
            "filter",
            query
                .filter()
                .iter()
                .map(|c| format!("{} {} {}", c.property(), c.operator(), c.value()))
                .collect::<Vec<_>>()
                .join(" and "),
        ),
    ];

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    println!("{}", format!("{:width$} │ value", "field").white().bold());
    println!("{}", format!("{}─┼─{}", "─".repeat(width), "─".repeat(40)).dimmed());
    for (name, value) in rows {
        let value = if value.is_empty() {
            "-".dimmed().to_string()
        } else {
            value
        };
        println!("{:width$} │ {}", name.cyan(), value);
    }
}

fn display_option<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn explain(url: &str, use_prefix: bool) -> anyhow::Result<()> {
    println!("{}", "Query Explanation".cyan().bold());
    println!();
    println!("{} {}", "Url:".dimmed(), url.yellow());
    println!(
        "{} {}",
        "Keys:".dimmed(),
        if use_prefix { "$-prefixed" } else { "bare" }
    );
    println!();

    let Some(query) = parse_url(url, use_prefix)? else {
        println!("{}", "No recognized keys; nothing to explain.".yellow());
        return Ok(());
    };

    println!("{}", "Parsed Structure:".green().bold());
    if !query.select().is_empty() {
        println!("  {}", "Select:".dimmed());
        for property in query.select() {
            println!("    • {}", property.white());
        }
    }
    if let Some(count) = query.count() {
        println!("  {} {}", "Count:".dimmed(), count.to_string().cyan());
    }
    if let Some(top) = query.top() {
        println!("  {} {}", "Top:".dimmed(), top.to_string().cyan());
    }
    if let Some(skip) = query.skip() {
        println!("  {} {}", "Skip:".dimmed(), skip.to_string().cyan());
    }
    if !query.order_by().is_empty() {
        println!("  {}", "Order by:".dimmed());
        for clause in query.order_by() {
            let arrow = match clause.direction() {
                OrderDirection::Ascending => "↑",
                OrderDirection::Descending => "↓",
            };
            println!("    {} {}", arrow.cyan(), clause.property().white());
        }
    }
    if !query.filter().is_empty() {
        println!("  {}", "Filter:".dimmed());
        for clause in query.filter() {
            println!(
                "    {} {:?} {}",
                clause.property().white(),
                clause.operator(),
                describe_value(clause.value()).yellow()
            );
        }
    }

    println!();
    println!("{}", "Canonical:".green().bold());
    println!("  {}", query.to_query_string(use_prefix).white());
    Ok(())
}

fn describe_value(value: &FilterValue) -> String {
    match value {
        FilterValue::Single(lit) => format!("{} ({})", lit, lit.type_name()),
        FilterValue::List(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|lit| format!("{} ({})", lit, lit.type_name()))
                .collect();
            format!("[{}]", items.join(", "))
        }
    }
}

fn render(url: &str, use_prefix: bool) -> anyhow::Result<()> {
    match parse_url(url, use_prefix)? {
        Some(query) => println!("{}", query.to_query_string(use_prefix)),
        None => println!("{}", "(no query)".dimmed()),
    }
    Ok(())
}

fn show_keys() {
    println!("{}", "Recognized Keys".cyan().bold());
    println!();

    let rows = [
        ("select", "Properties to return", "a,b,c"),
        ("count", "Include the total count", "1 | true | 0 | false"),
        ("top", "Rows to return", "non-negative integer"),
        ("skip", "Rows to skip", "non-negative integer"),
        ("orderby", "Sort order", "prop [asc|desc], ..."),
        ("filter", "Conditions, all must hold", "prop eq|ne|gt|ge|lt|le|in value and ..."),
    ];

    println!(
        "{:10} {:10} {:28} {}",
        "Prefixed".white().bold(),
        "Bare".white().bold(),
        "Meaning".white().bold(),
        "Value".white().bold()
    );
    println!("{}", "─".repeat(80).dimmed());

    for (name, meaning, value) in rows {
        println!(
            "{:10} {:10} {:28} {}",
            format!("${}", name).cyan().bold(),
            name.yellow(),
            meaning.white(),
            value.dimmed()
        );
    }
}
