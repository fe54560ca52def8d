#![allow(clippy::unwrap_used, clippy::expect_used)]

use r8_core::errors::R8Error;
use r8_core::logging_facility::test_capture::init_test_capture;
use r8_core::{generate_audit, group_phone_numbers, log_op_end, log_op_error, log_op_start};
use r8_core::{AuditContext, AuditFlag, EntrySnapshot, EntryState};
use r8_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use serde_json::json;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, row_id = "r1");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].fields.get("row_id"), Some(&"r1".to_string()));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, R8Error::MissingRowReference, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(
        event.fields.get("err_code"),
        Some(&"ERR_INVALID_ARGUMENT".to_string())
    );
    assert_eq!(
        event.fields.get("err_kind"),
        Some(&"InvalidArgument".to_string())
    );
}

#[test]
fn test_log_op_error_keeps_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_fields_unique_4";

    log_op_error!(
        op_name,
        R8Error::EmptyPhoneList,
        duration_ms = 1,
        input_len = 0
    );
    log_op_start!(op_name,);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0].fields.get("err_code"),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
    assert_eq!(events[0].fields.get("input_len"), Some(&"0".to_string()));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_START));
}

#[test]
fn test_grouping_logs_start_and_end() {
    let capture = init_test_capture();

    let input = ["100", "101", "102", "200", "300", "301", "999"];
    group_phone_numbers(&input).unwrap();

    let events = capture.events_for("group_phone_numbers");
    assert!(events.iter().any(|e| {
        e.event.as_deref() == Some(EVENT_START)
            && e.fields.get("input_len") == Some(&"7".to_string())
    }));
    assert!(events.iter().any(|e| {
        e.event.as_deref() == Some(EVENT_END)
            && e.fields.get("group_count") == Some(&"4".to_string())
    }));
}

#[test]
fn test_grouping_failure_logs_error_code() {
    let capture = init_test_capture();

    let empty: [&str; 0] = [];
    assert!(group_phone_numbers(&empty).is_err());

    let events = capture.events_for("group_phone_numbers");
    assert!(events.iter().any(|e| {
        e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err_code") == Some(&"ERR_INVALID_INPUT".to_string())
    }));
}

#[test]
fn test_audit_logs_change_count() {
    let capture = init_test_capture();

    let entry = EntrySnapshot::new("logged-row-5", EntryState::Modified)
        .with_field("A", Some(json!(1)), Some(json!(0)))
        .with_field("B", Some(json!(1)), Some(json!(0)));
    generate_audit(&entry, AuditFlag::Changed, &AuditContext::new(), &Default::default()).unwrap();

    let end = capture
        .events_for("generate_audit")
        .into_iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END)
                && e.fields.get("row_id") == Some(&"logged-row-5".to_string())
        })
        .expect("end event for logged-row-5");
    assert_eq!(end.fields.get("change_count"), Some(&"2".to_string()));
    assert!(end.component.as_deref().unwrap().contains("audit::record"));
}
