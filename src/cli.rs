use crate::group::GroupLogic;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A tool to compose compound filter selectors from groups of filter
/// controls described in a state file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file with composition defaults
    #[arg(short, long, global = true, env = "MULTIFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to write the result to, in addition to stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase diagnostic output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose the selector string from a group-state file
    Compose {
        /// JSON5 group-state file describing the active selections
        #[arg(short, long)]
        file: PathBuf,

        /// Override the inter-group logic from config and state file
        #[arg(long, value_enum)]
        between: Option<GroupLogic>,

        /// Print the raw selector, without the fallback default when empty
        #[arg(long)]
        no_default: bool,
    },
    /// List the expanded selector paths, one combination per line
    Paths {
        /// JSON5 group-state file describing the active selections
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Show each group's logic, active selections, and contribution
    Inspect {
        /// JSON5 group-state file describing the active selections
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
