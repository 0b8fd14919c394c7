//! CLI command handlers
//!
//! This module contains the interactive menu shell and the one-shot
//! subcommands, bridging the clap argument parsing with the service layer.

pub mod history;
pub mod menu;
pub mod shell;

pub use history::{handle_history_command, DEFAULT_HISTORY_LIMIT};
pub use menu::{render_menu, MenuChoice, UnknownChoice};
pub use shell::{SessionEnd, Shell};
