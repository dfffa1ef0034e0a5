//! CLI definition using clap

use clap::{Parser, Subcommand};
use logpack_types::{ColorChoice, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logpack")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Calculate how many logs of a given length fit on the truck")]
#[command(long_about = None)]
pub struct Cli {
    /// Defaults to `calc` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (table, json). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Color output (auto, always, never). Uses config value if not specified.
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Config file path override
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress the welcome banner
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the log amount for one log length
    Calc {
        /// Log length in meters. Read from stdin if not specified.
        #[arg(long, short = 'l', allow_hyphen_values = true)]
        length: Option<String>,

        /// Re-prompt after invalid input (overrides config)
        #[arg(long)]
        retry: bool,

        /// Only accept the offered log lengths (overrides config)
        #[arg(long)]
        strict: bool,
    },

    /// Show the offered log lengths and their log amounts
    Lengths,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set color mode
        #[arg(long)]
        set_color: Option<ColorChoice>,

        /// Enable/disable re-prompting after invalid input
        #[arg(long)]
        set_retry: Option<bool>,

        /// Enable/disable strict offered-length checking
        #[arg(long)]
        set_strict: Option<bool>,

        /// Enable/disable the welcome banner
        #[arg(long)]
        set_banner: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
