//! Tests for booking JSON parsing and timestamp handling.

use chrono::{DateTime, Utc};
use slot_engine::{bookings_from_json, parse_instant, SlotError, SlotPolicy};

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

// ── Timestamp parsing ────────────────────────────────────────────────────────

#[test]
fn rfc3339_and_offsetless_forms_parse_to_the_same_instant() {
    let expected = ts("2024-01-10T10:00:00Z");
    assert_eq!(parse_instant("2024-01-10T10:00:00Z").unwrap(), expected);
    assert_eq!(parse_instant("2024-01-10T12:00:00+02:00").unwrap(), expected);
    assert_eq!(parse_instant("2024-01-10T10:00:00").unwrap(), expected);
    assert_eq!(parse_instant("2024-01-10T10:00:00.000").unwrap(), expected);
    assert_eq!(parse_instant("2024-01-10T10:00").unwrap(), expected);
}

#[test]
fn garbage_timestamps_are_rejected() {
    assert!(matches!(
        parse_instant("not-a-time"),
        Err(SlotError::InvalidTimestamp(_))
    ));
    assert!(matches!(
        parse_instant("2024-13-40T99:00:00Z"),
        Err(SlotError::InvalidTimestamp(_))
    ));
}

// ── Bookings payload ─────────────────────────────────────────────────────────

#[test]
fn backend_payload_deserializes_with_extra_fields_ignored() {
    // Shape as returned by GET /bookings/forRoom/{id}, including the
    // embedded users list the evaluator doesn't need.
    let json = r#"[
        {
            "id": 42,
            "registration_time": "2024-01-10T10:00:00",
            "expiration_time": "2024-01-10T12:00:00",
            "registrator_email": "manager@feelthebook.example",
            "room_id": 7,
            "users": [{"email": "reader@feelthebook.example"}]
        }
    ]"#;

    let bookings = bookings_from_json(json).unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, 42);
    assert_eq!(bookings[0].registration_time, ts("2024-01-10T10:00:00Z"));
    assert_eq!(bookings[0].expiration_time, ts("2024-01-10T12:00:00Z"));
    assert_eq!(bookings[0].room_id, 7);
}

#[test]
fn missing_optional_fields_default() {
    let json = r#"[{"id": 1, "registration_time": "2024-01-10T10:00:00Z", "expiration_time": "2024-01-10T12:00:00Z"}]"#;
    let bookings = bookings_from_json(json).unwrap();
    assert_eq!(bookings[0].registrator_email, "");
    assert_eq!(bookings[0].room_id, 0);
}

#[test]
fn malformed_payload_is_a_typed_error() {
    assert!(matches!(
        bookings_from_json("{not json"),
        Err(SlotError::MalformedBookings(_))
    ));
    assert!(matches!(
        bookings_from_json(r#"[{"id": 1, "registration_time": "junk", "expiration_time": "2024-01-10T12:00:00Z"}]"#),
        Err(SlotError::MalformedBookings(_))
    ));
}

#[test]
fn empty_array_is_a_valid_snapshot() {
    assert!(bookings_from_json("[]").unwrap().is_empty());
}

// ── Policy construction ──────────────────────────────────────────────────────

#[test]
fn default_policy_matches_the_shipped_constants() {
    let policy = SlotPolicy::default();
    assert_eq!(policy.step_minutes, 15);
    assert_eq!(policy.gap_minutes, 60);
    assert_eq!(policy.min_booking_minutes, 120);
}

#[test]
fn unknown_timezone_is_rejected() {
    assert!(matches!(
        SlotPolicy::with_timezone("Mars/Olympus_Mons"),
        Err(SlotError::InvalidTimezone(_))
    ));
    assert!(SlotPolicy::with_timezone("Europe/Kyiv").is_ok());
}
