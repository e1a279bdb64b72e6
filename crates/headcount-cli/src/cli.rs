//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use headcount_types::{Category, OutputFormat};

#[derive(Parser)]
#[command(name = "headcount")]
#[command(version)]
#[command(about = "Per-category attendance counter for church services")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add people to a category
    Add {
        /// Category to increment (gents, ladies, kids)
        category: Category,

        /// How many to add
        #[arg(long, short = 'n', default_value_t = 1)]
        count: u32,
    },

    /// Remove one person from a category, floored at zero
    Remove {
        category: Category,
    },

    /// Set the service name for the current tally
    Service {
        /// Free-text service name (e.g., "Sunday AM")
        name: String,
    },

    /// Show the current tally
    Status,

    /// Save the tally as a record and rewrite the history CSV
    Save {
        /// Zero the tally and clear the service name after saving
        #[arg(long)]
        reset: bool,
    },

    /// Reset one category to zero, or the whole tally
    Reset {
        /// Category to reset; omit to reset everything
        category: Option<Category>,
    },

    /// End the session: delete the stored tally and session history
    ///
    /// The history CSV and any generated reports are left in place.
    Clear,

    /// List records saved during this session
    History,

    /// Generate the PDF report for the current tally
    Report {
        /// Output directory for the report
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export the history to an Excel workbook
    Export {
        /// Output xlsx file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
