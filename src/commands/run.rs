use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use sysaudit::domain::ports::{Confirmer, PolicyConfirmer};
use sysaudit::infrastructure::events::default_log_dir;
use sysaudit::infrastructure::{
    FanoutEventSink, InteractiveConfirmer, JsonEventSink, LineConfirmer, LogFileSink,
};
use sysaudit::presentation::{checks_path, create_audit_use_case, ColorWhen};
use sysaudit::Settings;

use super::{exit_code, load_settings};
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::audit::{render_log_written, render_run_header};

/// `sysaudit run` flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    pub checks: Option<PathBuf>,
    pub report_only: bool,
    pub yes: bool,
    pub skip_privileged: bool,
    pub no_log: bool,
    pub log_dir: Option<PathBuf>,
}

impl RunArgs {
    /// Layer flags that were given on top of the resolved settings
    pub fn apply(&self, settings: &mut Settings) {
        if self.report_only {
            settings.run.report_only = true;
        }
        if self.yes {
            settings.run.prompt = false;
        }
        if self.skip_privileged {
            settings.run.skip_privileged = true;
        }
        if self.no_log {
            settings.run.write_log = false;
        }
        if let Some(dir) = &self.log_dir {
            settings.run.log_dir = Some(dir.clone());
        }
    }
}

pub fn cmd_run(
    args: RunArgs,
    json: bool,
    color: Option<ColorWhen>,
    settings_path: Option<&Path>,
) -> Result<ExitCode> {
    let (mut settings, _) = load_settings(settings_path)?;
    args.apply(&mut settings);

    let ui = UiContext::new(json, color, &settings);
    let options = settings.audit_options();
    let checks = checks_path(args.checks.as_deref(), &settings);
    let log = if settings.run.write_log {
        open_log(&settings)
    } else {
        None
    };

    let mut sinks = FanoutEventSink::new();
    if json {
        sinks.push(Arc::new(JsonEventSink::stdout()));
    } else {
        print!(
            "{}",
            render_run_header(
                &checks,
                &options,
                log.as_ref().map(|l| l.path()),
                ui.color,
                ui.unicode
            )
        );
        sinks.push(Arc::new(ConsoleEventSink::new(&ui)));
    }
    if let Some(log) = &log {
        sinks.push(log.clone());
    }

    let confirmer: Arc<dyn Confirmer> = if !options.prompt {
        Arc::new(PolicyConfirmer)
    } else if ui.interactive() {
        Arc::new(InteractiveConfirmer::new(ui.color))
    } else if json {
        // Keep stdout pure NDJSON.
        Arc::new(LineConfirmer::new(
            BufReader::new(std::io::stdin()),
            std::io::stderr(),
        ))
    } else {
        Arc::new(LineConfirmer::stdio())
    };

    let use_case = create_audit_use_case(&checks);
    let report = use_case.execute_full(&options, Arc::new(sinks), confirmer)?;

    if !json {
        if !report.warnings.is_empty() {
            print!(
                "\n{}",
                WarningBlock::from_config_warnings(&report.warnings).render(ui.color, ui.unicode)
            );
        }
        if let Some(log) = &log {
            print!("\n{}", render_log_written(log.path()));
        }
    }

    Ok(exit_code(report.is_clean()))
}

/// Open the run log. Failure is reported and the run continues without it.
fn open_log(settings: &Settings) -> Option<Arc<LogFileSink>> {
    let Some(dir) = settings.run.log_dir.clone().or_else(default_log_dir) else {
        tracing::warn!("no log directory available; run log disabled");
        return None;
    };

    match LogFileSink::create(&dir) {
        Ok(sink) => Some(Arc::new(sink)),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot create run log");
            None
        }
    }
}
