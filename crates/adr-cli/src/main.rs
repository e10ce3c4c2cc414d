//! adr CLI: manage Architecture Decision Records
//!
//! Commands: init, new, index, list, completions

mod format;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use tracing::Level;

use adr_core::config::{AdrConfig, DEFAULT_CONFIG_FILE};
use adr_core::AdrError;
use adr_store::{ensure_dir, scan_dir, write_index, IndexOptions, NewRecordOptions, RecordStore};

use crate::format::{format_summaries, OutputFormat};

#[derive(Parser)]
#[command(name = "adr")]
#[command(version)]
#[command(about = "Manage Architecture Decision Records")]
struct Cli {
    /// Record directory [default: docs/adr]
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Config file; must exist when given [default: .adr.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create the record directory
    Init,
    /// Create a new record from a template
    New {
        title: String,
        /// madr, nygard or a path to a template file
        #[arg(long)]
        template: Option<String>,
        /// Initial status
        #[arg(long)]
        status: Option<String>,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Generate the index document
    Index {
        /// Output path, e.g. docs/adr/index.md
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        project_name: Option<String>,
        #[arg(long)]
        project_url: Option<String>,
    },
    /// List records
    #[command(alias = "ls")]
    List {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print shell completions
    Completions { shell: Shell },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "adr", &mut io::stdout());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let dir = cli.dir.unwrap_or_else(|| config.dir.clone());

    match cli.command {
        Commands::Init => {
            ensure_dir(&dir).with_context(|| format!("cannot create {}", dir.display()))?;
            println!("{}", dir.display());
        }
        Commands::New {
            title,
            template,
            status,
            date,
        } => {
            if let Some(date) = &date {
                validate_date(date)?;
            }
            let options = NewRecordOptions {
                template: template.unwrap_or(config.template),
                status: status.unwrap_or(config.status),
                date: date.unwrap_or_default(),
            };
            let store = RecordStore::new(dir);
            let path = store
                .create_record(&title, &options)
                .with_context(|| format!("cannot create record in {}", store.dir().display()))?;
            println!("{}", path.display());
        }
        Commands::Index {
            out,
            project_name,
            project_url,
        } => {
            let Some(out) = out.or(config.index) else {
                bail!("--out is required (e.g., --out docs/adr/index.md)");
            };
            let entries = scan(&dir)?;
            let options = IndexOptions {
                project_name: project_name.or(config.project_name),
                project_url: project_url.or(config.project_url),
            };
            write_index(&out, &entries, &options)
                .with_context(|| format!("cannot write index {}", out.display()))?;
            println!("{}", out.display());
        }
        Commands::List { format } => {
            let entries = scan(&dir)?;
            let output = format_summaries(&entries, format)?;
            if output.ends_with('\n') {
                print!("{output}");
            } else {
                println!("{output}");
            }
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Explicit `--config` paths must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> anyhow::Result<AdrConfig> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };
    AdrConfig::load(path, required).with_context(|| format!("cannot load config {}", path.display()))
}

fn scan(dir: &Path) -> anyhow::Result<Vec<adr_core::RecordSummary>> {
    scan_dir(dir).with_context(|| format!("cannot scan {}", dir.display()))
}

fn validate_date(date: &str) -> adr_core::Result<()> {
    let valid = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .is_ok_and(|d| d.format("%Y-%m-%d").to_string() == date);
    if valid {
        Ok(())
    } else {
        Err(AdrError::InvalidArgument(format!(
            "invalid date {date:?}, expected YYYY-MM-DD"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dates_must_be_zero_padded_iso_days() {
        assert!(validate_date("2025-01-15").is_ok());
        for bad in ["2025-1-5", "15/01/2025", "2025-02-30", "", "2025-01-15T00:00"] {
            assert!(
                matches!(validate_date(bad), Err(AdrError::InvalidArgument(_))),
                "{bad}"
            );
        }
    }
}
