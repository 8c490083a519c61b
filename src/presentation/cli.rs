//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--color`, `--verbose`, `--settings`) are
//! inherited by every subcommand. Running without a subcommand performs
//! the audit with default options.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// sysaudit - audit operating system configuration and fix divergences
#[derive(Parser, Debug)]
#[command(name = "sysaudit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'sysaudit' without arguments to audit ./sysaudit.json.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file (defaults to ./sysaudit.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every check and offer fixes for failures
    Run {
        /// Check definition file (.json or .toml)
        #[arg(short, long, value_name = "FILE")]
        checks: Option<PathBuf>,

        /// Evaluate only; never attempt a fix
        #[arg(long)]
        report_only: bool,

        /// Do not prompt; apply each fix according to its confidence default
        #[arg(short, long)]
        yes: bool,

        /// Bypass tests that need elevated privileges
        #[arg(long)]
        skip_privileged: bool,

        /// Do not write a run log file
        #[arg(long, conflicts_with = "log_dir")]
        no_log: bool,

        /// Directory for the run log (defaults to ~/Documents)
        #[arg(long, value_name = "DIR")]
        log_dir: Option<PathBuf>,
    },

    /// Decode and validate check definitions without running them
    Validate {
        /// Check definition file (.json or .toml)
        #[arg(short, long, value_name = "FILE")]
        checks: Option<PathBuf>,
    },

    /// List checks and their available fixes
    List {
        /// Check definition file (.json or .toml)
        #[arg(short, long, value_name = "FILE")]
        checks: Option<PathBuf>,
    },
}

impl Commands {
    /// The audit with every flag at its default
    pub fn default_run() -> Self {
        Commands::Run {
            checks: None,
            report_only: false,
            yes: false,
            skip_privileged: false,
            no_log: false,
            log_dir: None,
        }
    }
}
