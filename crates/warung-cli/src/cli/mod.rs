//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use warung_core::prefs::{PrefStore, paths};

mod commands;

#[derive(Parser)]
#[command(name = "warung")]
#[command(version = "0.1")]
#[command(about = "Warung — terminal storefront prototype")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the storefront UI (default when no command is given)
    Shop,

    /// Clear the persisted session
    Logout,

    /// Manage stored preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}

#[derive(clap::Subcommand)]
pub enum PrefsCommands {
    /// Print the preference file path
    Path,
    /// Show stored preferences
    Show,
    /// Delete the preference file
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Shop) => {
            // The TUI owns the terminal; logs go to a file instead.
            let _guard = init_file_logging();
            let store = PrefStore::open_default();
            let runtime =
                tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(warung_tui::run(store))
        }
        Some(Commands::Logout) => {
            init_stderr_logging();
            commands::logout::run()
        }
        Some(Commands::Prefs { command }) => {
            init_stderr_logging();
            commands::prefs::run(command)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging() -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(paths::logs_dir(), "warung.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
