//! Colored terminal rendering of audit events.

use std::io::{self, Write};
use std::sync::Mutex;

use sysaudit::domain::ports::{AuditEvent, AuditEventSink};

use crate::ui::blocks::check_item::{render_elevation_notice, render_fix_failed, CheckLine};
use crate::ui::blocks::manual_fix::ManualFixBlock;
use crate::ui::blocks::summary::TallySummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn new(ui: &UiContext) -> Self {
        Self::with_writer(ui.color, ui.unicode, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(color: bool, unicode: bool, writer: W) -> Self {
        Self {
            color,
            unicode,
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn render(&self, event: &AuditEvent) -> String {
        match event {
            AuditEvent::RunStarted { check_count, .. } => {
                let noun = if *check_count == 1 { "check" } else { "checks" };
                let line = ColoredText::dim(format!("Running {check_count} {noun}"));
                format!("{}\n\n", line.render(self.color))
            }
            AuditEvent::CheckEvaluated {
                ordinal,
                description,
                result,
            } => CheckLine {
                ordinal: *ordinal,
                description,
                verdict: result.verdict(),
            }
            .render(self.color),
            AuditEvent::ElevationNotice { command, .. } => {
                render_elevation_notice(command, self.color, self.unicode)
            }
            AuditEvent::FixFailedWarning { .. } => render_fix_failed(self.color, self.unicode),
            AuditEvent::ManualFixesPending { entries } => {
                format!("\n{}", ManualFixBlock::new(entries).render(self.color))
            }
            AuditEvent::RunCompleted { tally } => {
                let mut summary = TallySummary::new(*tally);
                if tally.fix_skipped > 0 {
                    summary.with_next_step("re-run without --report-only to apply fixes");
                } else if tally.fix_declined > 0 {
                    summary.with_next_step("re-run and accept the offered fixes");
                }
                format!("\n{}", summary.render(self.color, self.unicode))
            }
        }
    }
}

impl AuditEventSink for ConsoleEventSink {
    fn on_event(&self, event: &AuditEvent) {
        let text = self.render(event);
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}
