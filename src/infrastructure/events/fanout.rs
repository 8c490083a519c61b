//! Fanout Event Sink
//!
//! Forwards each event to every wrapped sink, in order.

use std::sync::Arc;

use crate::domain::ports::{AuditEvent, AuditEventSink};

#[derive(Default)]
pub struct FanoutEventSink {
    sinks: Vec<Arc<dyn AuditEventSink>>,
}

impl FanoutEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn AuditEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn push(&mut self, sink: Arc<dyn AuditEventSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl AuditEventSink for FanoutEventSink {
    fn on_event(&self, event: &AuditEvent) {
        for sink in &self.sinks {
            sink.on_event(event);
        }
    }
}
