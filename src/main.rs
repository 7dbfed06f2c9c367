use clap::Parser;
use std::path::PathBuf;
use std::process;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use todolists::CliResult;
use todolists::commands::Command;
use todolists_db::Database;

/// Environment variable name for the database path
const TDL_DB_PATH_ENV: &str = "TDL_DB_PATH";

/// todolists - browse task lists from the command line
#[derive(Parser)]
#[command(name = "tdl")]
#[command(version = "0.1.0")]
#[command(about = "Browse task lists and their items", long_about = None)]
struct Args {
    /// Path to the database directory (can also be set via TDL_DB_PATH env var)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the database path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --db argument
/// 2. TDL_DB_PATH environment variable (if non-empty)
/// 3. Default path (<project root>/.tdl/data)
fn resolve_db_path(cli_db: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_db {
        return path;
    }

    if let Ok(env_path) = std::env::var(TDL_DB_PATH_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    Database::default_path()
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=todolists_db=debug` - show query debug output only
/// - `RUST_LOG=warn` - the default
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
async fn run_app() -> CliResult<()> {
    let args = Args::parse();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling");
            on_interrupt.cancel();
        }
    });

    let output = run_with_args(&args, &cancel).await?;
    println!("{}", output);
    Ok(())
}

/// Run the application with the given arguments and return what to print
async fn run_with_args(args: &Args, cancel: &CancellationToken) -> CliResult<String> {
    let db_path = resolve_db_path(args.db.clone());
    debug!(path = %db_path.display(), "opening database");

    let db = Database::connect(&db_path).await?;
    db.init().await?;

    match &args.command {
        Some(cmd) => cmd.execute(&db, cancel).await,
        None => Ok("Welcome to todolists!\nUse 'tdl --help' for usage information.".to_string()),
    }
}
