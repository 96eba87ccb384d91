//! Logging Facility Tests
//!
//! The capture buffer is process-global and tests run in parallel, so each
//! test asserts on an op name no other test in this binary uses.

mod common;

use common::Fixture;
use omlvp_core::logging_facility::init_test_capture;
use omlvp_core::ops::instance_ops::delete_named_instance;
use omlvp_core::{log_op_end, log_op_error, log_op_start, CascadeAll, OmlEditError};
use tracing::Level;

#[test]
fn test_start_and_end_events_carry_canonical_fields() {
    let capture = init_test_capture();

    log_op_start!("logging_test_start_end", element = "n1v0");
    log_op_end!("logging_test_start_end", duration_ms = 7u64);

    let events = capture.events_for_op("logging_test_start_end");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some("start"));
    assert_eq!(events[0].field("element"), Some("n1v0"));
    assert_eq!(events[1].event.as_deref(), Some("end"));
    assert_eq!(events[1].field("duration_ms"), Some("7"));
    assert!(events[0].component.is_some());
}

#[test]
fn test_recoverable_error_logged_at_warn() {
    let capture = init_test_capture();
    let err = OmlEditError::UnknownProperty {
        property_id: "v:mass".to_string(),
    };

    log_op_error!("logging_test_recoverable", err, duration_ms = 0u64);

    let events = capture.events_for_op("logging_test_recoverable");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(events[0].event.as_deref(), Some("end_error"));
    assert_eq!(events[0].field("err_code"), Some("ERR_UNKNOWN_PROPERTY"));
    assert_eq!(events[0].field("err_kind"), Some("UnknownProperty"));
}

#[test]
fn test_integrity_error_logged_at_error() {
    let capture = init_test_capture();
    let err = OmlEditError::NodeDeleted {
        node: omlvp_core::NodeId::new(1, 0),
    };

    log_op_error!("logging_test_integrity", err, duration_ms = 0u64);

    let events = capture.events_for_op("logging_test_integrity");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field("err_code"), Some("ERR_DELETED"));
}

#[test]
fn test_cascade_cycle_emits_warning() {
    let capture = init_test_capture();
    let mut fx = Fixture::new();
    let a = fx.concept_instance("cycle_logging_a");
    let r1 = fx.relation_instance("r1", &[a], &[]);
    let r2 = fx.relation_instance("r2", &[], &[r1]);
    fx.add_target(r1, r2);

    delete_named_instance(&mut fx.graph, a, &CascadeAll).unwrap();

    let instance = a.to_string();
    let warnings = capture.count_events(|e| {
        e.level == Level::WARN && e.field("instance") == Some(instance.as_str())
    });
    assert!(warnings >= 1);
}
