use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jetkit",
    bin_name = "jetkit",
    version,
    about = "Bookkeeping utilities for jet-substructure analysis workflows",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON instead of styled text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recursively list files whose name matches a glob pattern
    Find {
        /// Directory to scan
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Glob pattern applied to file base names
        #[arg(short, long, default_value = "*")]
        pattern: String,

        /// Show a spinner on stderr while scanning
        #[arg(long)]
        progress: bool,
    },

    /// Print histogram bin edges
    Bins {
        /// Lower edge
        #[arg(allow_negative_numbers = true)]
        min: f64,

        /// Upper edge
        #[arg(allow_negative_numbers = true)]
        max: f64,

        /// Number of bins
        count: usize,

        /// Space edges uniformly in log10 instead of linearly
        #[arg(long)]
        log: bool,
    },

    /// Inspect an analysis configuration file
    Config {
        /// YAML configuration file
        file: PathBuf,

        /// Print a single observable block as attributes
        #[arg(short, long)]
        observable: Option<String>,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
