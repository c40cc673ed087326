//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Journal analyzer - track your mood and energy", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new journal entry
    Add {
        /// Journal entry text
        text: String,
    },

    /// View the last N entries
    Last {
        /// Number of entries
        #[arg(long = "n", default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },

    /// Show mood and energy statistics
    Stats {
        /// Analyze the last N entries
        #[arg(long = "n", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },

    /// Analyze text without saving it
    Check {
        /// Text to analyze
        text: String,
    },

    /// Delete all saved entries
    Clear,
}
