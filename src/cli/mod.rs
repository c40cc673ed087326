//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_check_report, format_entry_list, format_saved_entry, format_stats};
