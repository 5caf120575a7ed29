use anyhow::Result;
use bujo_store::Journal;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod calendar;
mod daily;
mod logbook;
mod project;

#[derive(Parser)]
#[command(name = "bujo", about = "Digital bullet journal", version)]
struct Cli {
    /// Journal root directory; defaults to BUJO_DIR or the working directory
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily task list
    Daily {
        #[command(subcommand)]
        action: daily::DailyCommand,
    },
    /// Projects and their task lists
    Project {
        #[command(subcommand)]
        action: project::ProjectCommand,
    },
    /// Freeform notes log
    Log {
        #[command(subcommand)]
        action: logbook::LogCommand,
    },
    /// Month calendar with statistics
    Calendar(calendar::CalendarArgs),
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let root = resolve_root(cli.dir)?;
    let mut journal = Journal::open(root);

    match cli.command {
        Commands::Daily { action } => daily::handle(&mut journal, action),
        Commands::Project { action } => project::handle(&mut journal, action),
        Commands::Log { action } => logbook::handle(&mut journal, action),
        Commands::Calendar(args) => calendar::handle(&journal, &args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("BUJO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("BUJO_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    Ok(std::env::current_dir()?)
}
