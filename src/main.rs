use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_history_command, Shell, DEFAULT_HISTORY_LIMIT};
use expense_tracker::config::{TrackerPaths, DEFAULT_DATA_FILE};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive terminal expense tracker with monthly budgets",
    long_about = "Expense Tracker records dated expenses, keeps a spending limit per \
                  calendar month and reports totals, all from a numbered menu. Data \
                  is kept in a JSON file that is loaded on start and saved on exit."
)]
struct Cli {
    /// JSON ledger loaded on start and written on save and exit
    #[arg(long, env = "EXPENSE_TRACKER_FILE", default_value = DEFAULT_DATA_FILE, global = true)]
    data_file: PathBuf,

    /// Do not write the audit log
    #[arg(long, global = true)]
    no_audit: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    #[command(alias = "menu")]
    Shell,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::with_data_file(cli.data_file);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let mut storage = if cli.no_audit {
                Storage::without_audit(paths)
            } else {
                Storage::new(paths)
            };

            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut storage, stdin.lock(), stdout.lock()).run()?;
        }
        Commands::History { limit } => {
            handle_history_command(&paths, limit, io::stdout().lock())?;
        }
    }

    Ok(())
}
