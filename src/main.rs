mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use campuscal_core::{expand, extract, feed, month, MonthData};
use clap::{Parser, Subcommand};
use log::debug;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "campuscal-cli")]
#[command(about = "Convert academic calendar tables into ICS feeds and JSON event lists")]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every document listed in the batch config
    Batch {
        /// Batch config file
        #[arg(short, long, default_value = "campuscal.toml")]
        config: PathBuf,
    },
    /// Process a single extracted-tables file
    Generate {
        /// Extracted tables (JSON) of one document
        tables: PathBuf,

        /// Where to write the ICS feed (defaults next to the input)
        #[arg(long)]
        ics: Option<PathBuf>,

        /// Also write the month data as JSON here
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Print a document's month data as JSON
    Inspect {
        /// Extracted tables (JSON) of one document
        tables: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    // Fail fast if the month lookup table is ever left incomplete
    month::validate_month_table()?;

    match cli.command {
        Commands::Batch { config } => cmd_batch(&config),
        Commands::Generate { tables, ics, json } => {
            cmd_generate(&tables, ics.as_deref(), json.as_deref())
        }
        Commands::Inspect { tables } => cmd_inspect(&tables),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn cmd_batch(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    if cfg.documents.is_empty() {
        anyhow::bail!(
            "No documents configured.\n\
            Add document names to {} first",
            config_path.display()
        );
    }

    let mut failed = 0;
    for name in &cfg.documents {
        println!("\n📅 Processing: {name}");
        if let Err(err) = process_document(&cfg, name) {
            eprintln!("  ✗ {name}: {err:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} documents failed", cfg.documents.len());
    }
    Ok(())
}

/// Extract one document and write both artifacts. Any extraction error
/// aborts this document before any artifact is written.
fn process_document(cfg: &config::Config, name: &str) -> Result<()> {
    let months = extract::extract_file(&cfg.tables_path(name))?;
    debug!("{name}: {} month sections", months.len());

    write_feed(&months, &cfg.ics_path(name))?;
    write_month_data(&months, &cfg.json_path(name))
}

fn cmd_generate(tables_path: &Path, ics: Option<&Path>, json: Option<&Path>) -> Result<()> {
    let months = extract::extract_file(tables_path)
        .with_context(|| format!("Failed to extract {}", tables_path.display()))?;
    println!(
        "Found {} month sections in {}",
        months.len(),
        tables_path.display()
    );

    let default_ics = tables_path.with_extension("ics");
    write_feed(&months, ics.unwrap_or(&default_ics))?;

    if let Some(path) = json {
        write_month_data(&months, path)?;
    }
    Ok(())
}

fn cmd_inspect(tables_path: &Path) -> Result<()> {
    let months = extract::extract_file(tables_path)?;
    println!("{}", serde_json::to_string_pretty(&months)?);
    Ok(())
}

fn write_feed(months: &[MonthData], path: &Path) -> Result<()> {
    let events = expand::expand_events(months)?;
    let ics = feed::generate_feed(&events);
    write_file(path, ics.as_bytes())?;
    println!("  Wrote {} events to {}", events.len(), path.display());
    Ok(())
}

fn write_month_data(months: &[MonthData], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(months)?;
    write_file(path, json.as_bytes())?;
    println!("  Wrote month data to {}", path.display());
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
