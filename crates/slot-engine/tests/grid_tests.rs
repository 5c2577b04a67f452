//! Tests for slot grid enumeration.

use chrono::{DateTime, NaiveDate, Utc};
use slot_engine::{end_slots, start_slots, Booking, SlotPolicy};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

fn day(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

fn booking(reg: &str, exp: &str) -> Booking {
    Booking {
        id: 1,
        registration_time: ts(reg),
        expiration_time: ts(exp),
        registrator_email: String::new(),
        room_id: 7,
    }
}

// ── Start slots ──────────────────────────────────────────────────────────────

#[test]
fn free_day_yields_the_full_grid() {
    let policy = SlotPolicy::default();
    let slots = start_slots(&policy, day("2024-01-10"), &[], ts("2024-01-01T00:00:00Z"));

    // 24 hours at a 15-minute step.
    assert_eq!(slots.len(), 96);
    assert_eq!(slots[0], ts("2024-01-10T00:00:00Z"));
    assert_eq!(slots[95], ts("2024-01-10T23:45:00Z"));
}

#[test]
fn padded_booking_removes_its_cells() {
    // Booking 10:00-12:00 with gap 60 blocks [09:00, 13:00] inclusive:
    // 17 cells at a 15-minute step.
    let policy = SlotPolicy::default();
    let bookings = [booking("2024-01-10T10:00:00Z", "2024-01-10T12:00:00Z")];
    let slots = start_slots(&policy, day("2024-01-10"), &bookings, ts("2024-01-01T00:00:00Z"));

    assert_eq!(slots.len(), 96 - 17);
    // The last cell before the window and the first after it.
    assert!(slots.contains(&ts("2024-01-10T08:45:00Z")));
    assert!(slots.contains(&ts("2024-01-10T13:15:00Z")));
    assert!(!slots.contains(&ts("2024-01-10T09:00:00Z")));
    assert!(!slots.contains(&ts("2024-01-10T13:00:00Z")));
}

#[test]
fn cells_before_now_are_dropped() {
    let policy = SlotPolicy::default();
    let slots = start_slots(&policy, day("2024-01-10"), &[], ts("2024-01-10T12:00:00Z"));

    assert_eq!(slots.len(), 48);
    assert_eq!(slots[0], ts("2024-01-10T12:00:00Z"));
}

#[test]
fn grid_follows_the_render_timezone() {
    // Kyiv is UTC+2 in January; the local day opens at 22:00Z the
    // previous evening.
    let policy = SlotPolicy::with_timezone("Europe/Kyiv").unwrap();
    let slots = start_slots(&policy, day("2024-01-10"), &[], ts("2024-01-01T00:00:00Z"));

    assert_eq!(slots.len(), 96);
    assert_eq!(slots[0], ts("2024-01-09T22:00:00Z"));
}

#[test]
fn dst_short_day_has_fewer_cells() {
    // Europe/London springs forward on 2024-03-31; the local day is 23
    // hours long.
    let policy = SlotPolicy::with_timezone("Europe/London").unwrap();
    let slots = start_slots(&policy, day("2024-03-31"), &[], ts("2024-01-01T00:00:00Z"));

    assert_eq!(slots.len(), 92);
}

// ── End slots ────────────────────────────────────────────────────────────────

#[test]
fn end_slots_start_at_the_minimum_duration() {
    let policy = SlotPolicy::default();
    let start = ts("2024-01-10T09:00:00Z");
    let slots = end_slots(&policy, day("2024-01-10"), start, &[], ts("2024-01-01T00:00:00Z"));

    // Everything from 11:00 (start + 120 minutes) to 23:45.
    assert_eq!(slots[0], ts("2024-01-10T11:00:00Z"));
    assert_eq!(slots.len(), 52);
}

#[test]
fn end_slots_respect_padded_intervals_too() {
    let policy = SlotPolicy::default();
    let start = ts("2024-01-10T01:00:00Z");
    let bookings = [booking("2024-01-10T10:00:00Z", "2024-01-10T12:00:00Z")];
    let slots = end_slots(&policy, day("2024-01-10"), start, &bookings, ts("2024-01-01T00:00:00Z"));

    // Duration-admissible cells run from 03:00; the padded window
    // [09:00, 13:00] is carved out of them.
    assert_eq!(slots[0], ts("2024-01-10T03:00:00Z"));
    assert!(!slots.contains(&ts("2024-01-10T09:00:00Z")));
    assert!(!slots.contains(&ts("2024-01-10T13:00:00Z")));
    assert!(slots.contains(&ts("2024-01-10T13:15:00Z")));
}
