use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::handler::InterruptHandler;
use crate::record::InterruptRecord;

/// Cloneable thread-safe handle over an [`InterruptHandler`].
///
/// For environments where the engine and the UI poll from different threads.
/// Clones share the same underlying handler; read accessors return owned
/// values instead of references because the lock guard cannot escape.
#[derive(Clone, Debug, Default)]
pub struct SharedInterruptHandler {
    inner: Arc<RwLock<InterruptHandler>>,
}

impl SharedInterruptHandler {
    /// Create a shared handler with no pending interrupt.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`InterruptHandler::report`].
    pub fn report(&self, payload: impl Into<Value>) {
        self.inner.write().expect("lock").report(payload);
    }

    /// See [`InterruptHandler::report_with_message`].
    pub fn report_with_message(&self, payload: impl Into<Value>, message: impl Into<String>) {
        self.inner
            .write()
            .expect("lock")
            .report_with_message(payload, message);
    }

    /// A clone of the pending record, if any.
    pub fn current(&self) -> Option<InterruptRecord> {
        self.inner.read().expect("lock").current().cloned()
    }

    /// See [`InterruptHandler::clear`].
    pub fn clear(&self) {
        self.inner.write().expect("lock").clear();
    }

    /// See [`InterruptHandler::take`].
    pub fn take(&self) -> Option<InterruptRecord> {
        self.inner.write().expect("lock").take()
    }

    /// See [`InterruptHandler::is_waiting`].
    pub fn is_waiting(&self) -> bool {
        self.inner.read().expect("lock").is_waiting()
    }

    /// A clone of the pending record's payload, if any.
    pub fn resume_payload(&self) -> Option<Value> {
        self.inner.read().expect("lock").resume_payload().cloned()
    }

    /// The pending record's message, or `""` when nothing is pending.
    pub fn message(&self) -> String {
        self.inner.read().expect("lock").message().to_string()
    }

    /// See [`InterruptHandler::timestamp`].
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.inner.read().expect("lock").timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let handler = SharedInterruptHandler::new();
        let observer = handler.clone();

        handler.report(serde_json::json!({ "message": "Review output" }));
        assert!(observer.is_waiting());
        assert_eq!(observer.message(), "Review output");

        observer.clear();
        assert!(!handler.is_waiting());
    }
}
