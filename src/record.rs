use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InterruptStateError;

/// Message used when neither the caller nor the payload provides one.
pub const DEFAULT_MESSAGE: &str = "User input required";

/// A pending interrupt.
///
/// Created when the workflow engine pauses for external input. The payload
/// is opaque resume data owned by the engine; the only thing read off it is
/// an optional top-level `"message"` string used to default [`message`].
///
/// [`message`]: InterruptRecord::message
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InterruptRecord {
    /// Opaque resume data to hand back to the engine's resume operation.
    pub payload: Value,
    /// Human-readable description of why execution paused.
    pub message: String,
    /// When the interrupt was recorded.
    pub timestamp: DateTime<Utc>,
}

impl InterruptRecord {
    /// Create a record with the message derived from the payload.
    ///
    /// Uses the payload's top-level `"message"` field when it is a string,
    /// otherwise [`DEFAULT_MESSAGE`]. Stamps the current time.
    pub fn new(payload: impl Into<Value>) -> Self {
        let payload = payload.into();
        let message = derive_message(&payload);
        Self {
            payload,
            message,
            timestamp: Utc::now(),
        }
    }

    /// Create a record with an explicit message.
    ///
    /// The explicit message wins over any `"message"` field on the payload.
    pub fn with_message(payload: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Convert to JSON, for callers that transport the record.
    pub fn to_json(&self) -> Result<Value, InterruptStateError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse a record back from its JSON form.
    pub fn from_json(value: Value) -> Result<Self, InterruptStateError> {
        Ok(serde_json::from_value(value)?)
    }
}

fn derive_message(payload: &Value) -> String {
    payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_MESSAGE)
        .to_string()
}
