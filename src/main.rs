//! sysaudit CLI - audit operating system configuration
//!
//! Usage: sysaudit [COMMAND]
//!
//! Commands:
//!   run       Evaluate every check and offer fixes (default)
//!   validate  Decode and validate check definitions
//!   list      List checks and their available fixes

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use sysaudit::infrastructure::logging::{init_logging, LogConfig};
use sysaudit::presentation::{Cli, ColorWhen, Commands};

use commands::{RunArgs, EXIT_CONFIG};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ansi = match cli.color {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => std::io::stderr().is_terminal(),
    };
    init_logging(LogConfig::new().verbosity(cli.verbose).ansi(ansi));

    let json = cli.json;
    match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            ui::error::print_error(&err, json);
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = cli.settings.as_deref();
    match cli.command.unwrap_or_else(Commands::default_run) {
        Commands::Run {
            checks,
            report_only,
            yes,
            skip_privileged,
            no_log,
            log_dir,
        } => commands::cmd_run(
            RunArgs {
                checks,
                report_only,
                yes,
                skip_privileged,
                no_log,
                log_dir,
            },
            cli.json,
            cli.color,
            settings,
        ),
        Commands::Validate { checks } => {
            commands::cmd_validate(checks, cli.json, cli.color, settings)
        }
        Commands::List { checks } => commands::cmd_list(checks, cli.json, cli.color, settings),
    }
}
