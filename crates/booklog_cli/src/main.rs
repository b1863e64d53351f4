//! Terminal shell for the book catalog.
//!
//! # Responsibility
//! - Parse the storage location and logging flags.
//! - Initialize logging and storage once, then run the menu loop.

use anyhow::{Context, Result};
use booklog_core::{
    core_version, default_log_level, init_logging, CatalogConfig, CatalogService,
    DEFAULT_DB_FILE_NAME,
};
use clap::Parser;
use log::info;
use std::path::PathBuf;

mod prompter;
mod shell;

use prompter::TerminalPrompter;

fn parse_absolute_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(name = "booklog", version, about = "Single-user book catalog")]
struct CliArgs {
    /// Catalog file, created on first start.
    #[arg(long, default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Write rolling logs into this directory.
    #[arg(long, value_parser = parse_absolute_path)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error, only used together with --log-dir.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if let Some(log_dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    info!("event=cli_start module=cli status=ok core_version={}", core_version());

    let service = CatalogService::new(CatalogConfig::new(args.db));
    service.initialize().with_context(|| {
        format!(
            "failed to open catalog at `{}`",
            service.config().db_path().display()
        )
    })?;

    let mut prompter = TerminalPrompter::new().context("failed to start terminal input")?;
    shell::run(&service, &mut prompter);
    Ok(())
}
