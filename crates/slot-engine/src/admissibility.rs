//! Admissibility predicates for booking-picker candidates.
//!
//! Four pure predicates over a room's existing bookings decide which
//! calendar days and time cells a booking-creation picker may offer:
//! start days, start times, end days (given a chosen start), and end
//! times. All of them take wall-clock `now` explicitly so tests can pin
//! it, and none of them mutate anything.
//!
//! These checks are advisory UX filtering only — the backend re-validates
//! every booking on write and stays authoritative.

use chrono::{DateTime, Utc};

use crate::booking::Booking;
use crate::policy::{SlotPolicy, CONSERVATIVE_DAY_REJECTION};

/// May `candidate` be offered as a start time-of-day cell?
///
/// Rejects instants in the past and instants inside any booking's padded
/// interval. Containment is inclusive on both ends: the exact instants
/// `registration_time - gap` and `expiration_time + gap` are themselves
/// blocked.
pub fn hour_admissible(
    policy: &SlotPolicy,
    candidate: DateTime<Utc>,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> bool {
    if candidate < now {
        return false;
    }
    !bookings.iter().any(|booking| {
        let (lo, hi) = booking.padded(policy.gap());
        lo <= candidate && candidate <= hi
    })
}

/// May the day containing `candidate` be offered as a start day cell?
///
/// Walks the bookings in list order, skipping the candidate past each
/// padded interval it lands in. If any single skip crosses a local
/// midnight, the day is rejected — even when earlier hours of the day
/// were free (see [`CONSERVATIVE_DAY_REJECTION`]).
pub fn day_admissible(
    policy: &SlotPolicy,
    candidate: DateTime<Utc>,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> bool {
    if candidate < now {
        return false;
    }
    advance_stays_in_day(policy, candidate, bookings)
}

/// May the day containing `candidate` be offered as an end day cell,
/// given the start instant already chosen (if any)?
///
/// On top of the [`day_admissible`] walk: the end day may never precede
/// the start's calendar day, and once the candidate has moved past the
/// start, any booking whose padded window still lies ahead of the start
/// blocks spanning across it.
pub fn day_span_admissible(
    policy: &SlotPolicy,
    candidate: DateTime<Utc>,
    start: Option<DateTime<Utc>>,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> bool {
    if candidate < now {
        return false;
    }
    if let Some(start) = start {
        if policy.local_date(candidate) < policy.local_date(start) {
            return false;
        }
    }

    let mut cursor = candidate;
    for booking in bookings {
        let (lo, hi) = booking.padded(policy.gap());
        if let Some(start) = start {
            if cursor > start && start < lo {
                return false;
            }
        }
        if lo <= cursor && cursor <= hi {
            let before = cursor;
            cursor = hi;
            if CONSERVATIVE_DAY_REJECTION && !policy.same_local_day(before, cursor) {
                return false;
            }
        }
    }
    true
}

/// May `candidate` be offered as an end time-of-day cell for a booking
/// starting at `start`?
///
/// Requires [`hour_admissible`] plus the minimum booking duration between
/// start and end. The duration rule binds regardless of overlap — an
/// empty room still cannot host a sub-minimum booking.
pub fn end_time_admissible(
    policy: &SlotPolicy,
    candidate: DateTime<Utc>,
    start: DateTime<Utc>,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> bool {
    hour_admissible(policy, candidate, bookings, now)
        && candidate.signed_duration_since(start) >= policy.min_booking()
}

/// Scan-and-advance walk shared by the day predicates.
///
/// Each time the cursor lands inside a padded interval it jumps to that
/// interval's end and the scan continues with the remaining bookings.
/// Returns false when a jump crosses a local day boundary.
fn advance_stays_in_day(
    policy: &SlotPolicy,
    candidate: DateTime<Utc>,
    bookings: &[Booking],
) -> bool {
    let mut cursor = candidate;
    for booking in bookings {
        let (lo, hi) = booking.padded(policy.gap());
        if lo <= cursor && cursor <= hi {
            let before = cursor;
            cursor = hi;
            if CONSERVATIVE_DAY_REJECTION && !policy.same_local_day(before, cursor) {
                return false;
            }
        }
    }
    true
}
