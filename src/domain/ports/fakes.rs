//! In-memory port implementations shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use super::{AuditEvent, AuditEventSink, CommandRunner, Confirmer};

/// Runner answering from a script of outputs per command.
///
/// Each command pops its next output; the last one repeats. Unscripted
/// commands fail to spawn.
#[derive(Default)]
pub struct ScriptedRunner {
    script: Mutex<HashMap<String, VecDeque<String>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, command: &str, outputs: &[&str]) -> Self {
        self.script.lock().unwrap().insert(
            command.to_string(),
            outputs.iter().map(|o| o.to_string()).collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, command: &str) -> usize {
        self.calls().iter().filter(|c| *c == command).count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn execute(&self, command: &str) -> io::Result<String> {
        self.calls.lock().unwrap().push(command.to_string());
        let mut script = self.script.lock().unwrap();
        let outputs = script.get_mut(command).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("unscripted: {command}"))
        })?;
        let output = if outputs.len() > 1 {
            outputs.pop_front()
        } else {
            outputs.front().cloned()
        };
        Ok(output.unwrap_or_default())
    }
}

/// Sink that records every event
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, AuditEvent::FixFailedWarning { .. }))
            .count()
    }

    pub fn notices(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, AuditEvent::ElevationNotice { .. }))
            .count()
    }
}

impl AuditEventSink for RecordingSink {
    fn on_event(&self, event: &AuditEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Confirmer with a fixed answer that records every question
pub struct ScriptedConfirmer {
    answer: bool,
    questions: Mutex<Vec<(String, bool)>>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<(String, bool)> {
        self.questions.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, question: &str, default: bool) -> bool {
        self.questions
            .lock()
            .unwrap()
            .push((question.to_string(), default));
        self.answer
    }
}
