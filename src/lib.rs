//! # workflow-interrupts
//!
//! Interrupt-state bookkeeping for workflow and graph engines. When an engine
//! pauses for external input (a human approval gate, say), it reports the
//! interrupt here; a UI layer polls this crate to render status and clears it
//! once the user has supplied whatever unblocks the workflow.
//!
//! ## Overview
//!
//! - **[`InterruptHandler`]** — single-slot store: at most one pending
//!   interrupt, last-write-wins replacement, no queue and no history
//! - **[`InterruptRecord`]** — the stored entity: opaque resume payload,
//!   human-readable message, capture timestamp
//! - **[`SharedInterruptHandler`]** — cloneable thread-safe handle for
//!   environments where the engine and the UI run on different threads
//!
//! The resume payload is an opaque [`serde_json::Value`] owned entirely by
//! the engine; this crate never inspects it beyond optionally reading a
//! top-level `"message"` field to default the status message.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! workflow-interrupts = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use workflow_interrupts::InterruptHandler;
//! use serde_json::json;
//!
//! let mut handler = InterruptHandler::new();
//!
//! // The engine pauses and reports why.
//! handler.report(json!({
//!     "message": "Approve the pending transfer?",
//!     "action": { "name": "transfer", "args": { "amount": 250 } },
//! }));
//!
//! // The UI polls for status.
//! assert!(handler.is_waiting());
//! assert_eq!(handler.message(), "Approve the pending transfer?");
//!
//! // Hand the payload back to the engine's resume operation, then clear.
//! let _payload = handler.resume_payload().cloned();
//! handler.clear();
//! assert!(!handler.is_waiting());
//! ```

/// Error type for the JSON conversion surface.
pub mod error;
/// The single-slot interrupt store and its operation set.
pub mod handler;
/// The interrupt record entity and message defaulting.
pub mod record;
/// Thread-safe shared handle over the handler.
pub mod shared;


pub use error::*;
pub use handler::*;
pub use record::*;
pub use shared::*;
