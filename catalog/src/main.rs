//! Query CLI for the conditional-pattern catalog.
//!
//! The catalog is loaded and frozen once per invocation (builtin data, or a
//! TOML file given with `--data`) and passed by reference to the command
//! handlers; there is no global instance.

use std::path::PathBuf;

use anyhow::Result;
use catalog::core::catalog::{Catalog, Pattern};
use catalog::exit_codes;
use catalog::io::store::{builtin_catalog, load_catalog};
use catalog::logging;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Query the catalog of alternatives to conditional branching"
)]
struct Cli {
    /// Load catalog data from a TOML file instead of the builtin data.
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print pattern ids and names in catalog order.
    List {
        /// Emit the listing as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print a pattern's before snippets and alternatives.
    Show {
        pattern_id: String,

        /// Emit the pattern as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Parse and invariant-check catalog data without printing it.
    Validate,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.data {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog()?,
    };
    debug!(patterns = catalog.len(), "catalog loaded");

    match cli.command {
        Command::List { json } => cmd_list(&catalog, json),
        Command::Show { pattern_id, json } => cmd_show(&catalog, &pattern_id, json),
        Command::Validate => cmd_validate(&catalog),
    }
}

fn cmd_list(catalog: &Catalog, json: bool) -> Result<()> {
    let summaries = catalog.list_patterns();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for summary in summaries {
        println!("{}\t{}", summary.id, summary.name);
    }
    Ok(())
}

fn cmd_show(catalog: &Catalog, pattern_id: &str, json: bool) -> Result<()> {
    let pattern = catalog.get(pattern_id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(pattern)?);
        return Ok(());
    }
    print_pattern(pattern);
    Ok(())
}

/// Report the already-validated catalog (loading failed earlier otherwise).
fn cmd_validate(catalog: &Catalog) -> Result<()> {
    let alternatives: usize = catalog.iter().map(|p| p.alternatives.len()).sum();
    println!(
        "ok: {} patterns, {} alternatives",
        catalog.len(),
        alternatives
    );
    Ok(())
}

fn print_pattern(pattern: &Pattern) {
    println!(
        "{}: {} ({})",
        pattern.id,
        pattern.name,
        pattern.category.as_str()
    );
    for snippet in &pattern.before {
        println!();
        println!("before:");
        print_indented(snippet);
    }
    for alternative in &pattern.alternatives {
        println!();
        println!("alternative: {}", alternative.name);
        println!("  {}", alternative.rationale);
        println!();
        print_indented(&alternative.after);
    }
}

fn print_indented(snippet: &str) {
    for line in snippet.trim_end().lines() {
        println!("    {}", line);
    }
}
