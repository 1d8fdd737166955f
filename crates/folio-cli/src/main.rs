//! # folio CLI entry point
//!
//! Parses command-line arguments, resolves the content directories and
//! dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio_cli::backup::{run_backup, BackupArgs};
use folio_cli::config::{ContentPaths, FolioConfig};
use folio_cli::find_repo_root;
use folio_cli::list::{run_list, ListArgs};
use folio_cli::show::{run_show, ShowArgs};
use folio_cli::template::{run_template, TemplateArgs};
use folio_cli::validate::{run_validate, ValidateArgs};

/// Portfolio content tool.
///
/// Lists, shows, validates and backs up the portfolio content categories
/// (personal info, skills, experience, projects) against their JSON Schemas.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: `<repo>/folio.yaml` if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content directory (overrides `content_dir` from the config file).
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Schema directory (overrides `schema_dir` from the config file).
    #[arg(long, global = true)]
    schema_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List content categories and their files.
    List(ListArgs),

    /// Print a category's validated content as JSON.
    Show(ShowArgs),

    /// Validate content against the category schemas.
    Validate(ValidateArgs),

    /// Copy the content files into a timestamped backup directory.
    Backup(BackupArgs),

    /// Print a valid project record to start a new entry from.
    #[command(name = "project-template")]
    ProjectTemplate(TemplateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "folio CLI starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let repo_root = find_repo_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("Could not locate repository root; using current directory");
        cwd.clone()
    });
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let config = FolioConfig::discover(cli.config.as_deref(), &repo_root)?;
    let paths = ContentPaths::resolve(
        &repo_root,
        &config,
        cli.content_dir.as_deref(),
        cli.schema_dir.as_deref(),
    );
    tracing::debug!(
        content_dir = %paths.content_dir.display(),
        schema_dir = %paths.schema_dir.display(),
        "resolved content paths"
    );

    let stdout = std::io::stdout();
    let out = &mut stdout.lock();

    match cli.command {
        Commands::List(args) => run_list(&args, &paths, out),
        Commands::Show(args) => run_show(&args, &paths, out),
        Commands::Validate(args) => run_validate(&args, &paths, out),
        Commands::Backup(args) => run_backup(&args, &paths, out),
        Commands::ProjectTemplate(args) => run_template(&args, out),
    }
}
