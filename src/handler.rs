use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::record::InterruptRecord;

/// Single-slot store for "is the workflow paused, and if so, on what".
///
/// Holds at most one pending [`InterruptRecord`]. Reporting a new interrupt
/// silently replaces any prior unresolved record (last-write-wins, no queue,
/// no history); absence of a record means the workflow is not interrupted.
///
/// Intended usage: the engine calls [`report`] when it suspends, a UI layer
/// polls [`is_waiting`], [`message`], and [`timestamp`] to render status,
/// hands [`resume_payload`] back to the engine, and calls [`clear`] once the
/// workflow has been resumed. Construct one handler per running workflow and
/// pass it explicitly; for concurrent callers use
/// [`SharedInterruptHandler`](crate::shared::SharedInterruptHandler).
///
/// [`report`]: InterruptHandler::report
/// [`is_waiting`]: InterruptHandler::is_waiting
/// [`message`]: InterruptHandler::message
/// [`timestamp`]: InterruptHandler::timestamp
/// [`resume_payload`]: InterruptHandler::resume_payload
/// [`clear`]: InterruptHandler::clear
#[derive(Clone, Debug, Default)]
pub struct InterruptHandler {
    pending: Option<InterruptRecord>,
}

impl InterruptHandler {
    /// Create a handler with no pending interrupt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new interrupt with an opaque resume payload.
    ///
    /// The record's message is taken from the payload's top-level
    /// `"message"` field when it is a string, otherwise
    /// [`DEFAULT_MESSAGE`](crate::record::DEFAULT_MESSAGE). The timestamp is
    /// captured now. Any previously stored record is replaced.
    pub fn report(&mut self, payload: impl Into<Value>) {
        self.install(InterruptRecord::new(payload));
    }

    /// Record a new interrupt with an explicit message.
    ///
    /// The explicit message wins over any `"message"` field on the payload.
    pub fn report_with_message(&mut self, payload: impl Into<Value>, message: impl Into<String>) {
        self.install(InterruptRecord::with_message(payload, message));
    }

    fn install(&mut self, record: InterruptRecord) {
        if self.pending.is_some() {
            log::debug!("Replacing pending interrupt: {}", record.message);
        } else {
            log::debug!("Interrupt reported: {}", record.message);
        }
        self.pending = Some(record);
    }

    /// The pending record, if any.
    pub fn current(&self) -> Option<&InterruptRecord> {
        self.pending.as_ref()
    }

    /// Discard the pending record unconditionally.
    ///
    /// Idempotent: clearing when nothing is pending is a no-op.
    pub fn clear(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("Interrupt cleared");
        }
    }

    /// Remove and return the pending record in one step.
    ///
    /// Convenience for callers that hand the payload to the engine's resume
    /// operation and clear in the same motion.
    pub fn take(&mut self) -> Option<InterruptRecord> {
        let record = self.pending.take();
        if record.is_some() {
            log::debug!("Interrupt taken");
        }
        record
    }

    /// Whether a record is currently pending.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// The opaque payload of the pending record, to hand back to the
    /// engine's resume operation.
    pub fn resume_payload(&self) -> Option<&Value> {
        self.pending.as_ref().map(|record| &record.payload)
    }

    /// The pending record's message, or `""` when nothing is pending.
    pub fn message(&self) -> &str {
        self.pending
            .as_ref()
            .map(|record| record.message.as_str())
            .unwrap_or("")
    }

    /// When the pending record was reported, if anything is pending.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|record| record.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_handler_not_waiting() {
        let handler = InterruptHandler::new();
        assert!(!handler.is_waiting());
        assert!(handler.current().is_none());
        assert!(handler.resume_payload().is_none());
        assert!(handler.timestamp().is_none());
        assert_eq!(handler.message(), "");
    }

    #[test]
    fn test_report_then_clear() {
        let mut handler = InterruptHandler::new();
        handler.report(serde_json::json!({ "message": "Approve?" }));
        assert!(handler.is_waiting());
        assert_eq!(handler.message(), "Approve?");

        handler.clear();
        assert!(!handler.is_waiting());
        assert!(handler.current().is_none());
    }

    #[test]
    fn test_take_removes_record() {
        let mut handler = InterruptHandler::new();
        handler.report(serde_json::json!("pause"));

        let record = handler.take().unwrap();
        assert_eq!(record.payload, serde_json::json!("pause"));
        assert!(!handler.is_waiting());
        assert!(handler.take().is_none());
    }
}
