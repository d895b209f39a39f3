//! Lifecycle tests
//!
//! Exercise the public API the way the two collaborators use it: an engine
//! reporting interrupts and a UI polling status and clearing.

use workflow_interrupts::{InterruptHandler, InterruptRecord, SharedInterruptHandler};

#[test]
fn test_engine_ui_round_trip() {
    let mut handler = InterruptHandler::new();

    // Engine suspends.
    let payload = serde_json::json!({
        "message": "Approve the pending transfer?",
        "action": { "name": "transfer", "args": { "amount": 250 } },
    });
    handler.report(payload.clone());

    // UI polls.
    assert!(handler.is_waiting());
    assert_eq!(handler.message(), "Approve the pending transfer?");
    assert!(handler.timestamp().is_some());

    // Engine resumes with the payload, UI clears.
    assert_eq!(handler.resume_payload(), Some(&payload));
    handler.clear();
    assert!(!handler.is_waiting());
    assert_eq!(handler.message(), "");
}

#[test]
fn test_record_transport_round_trip() {
    let mut handler = InterruptHandler::new();
    handler.report_with_message(serde_json::json!({ "step": 2 }), "Provide credentials");

    let record = handler.current().unwrap().clone();
    let json = record.to_json().unwrap();
    let parsed = InterruptRecord::from_json(json).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_shared_handler_across_threads() {
    let handler = SharedInterruptHandler::new();

    let engine = handler.clone();
    std::thread::spawn(move || {
        engine.report(serde_json::json!({ "message": "Pick a branch" }));
    })
    .join()
    .unwrap();

    assert!(handler.is_waiting());
    assert_eq!(handler.message(), "Pick a branch");

    let record = handler.take().unwrap();
    assert_eq!(record.message, "Pick a branch");
    assert!(!handler.is_waiting());
}
