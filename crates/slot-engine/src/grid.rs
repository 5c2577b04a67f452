//! Slot grid enumeration — the fixed-step candidate instants a time
//! picker offers for one local calendar day.
//!
//! The admissibility predicates only judge candidates; this module
//! produces them, walking a local day at the policy's step and keeping
//! the instants that pass.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::admissibility::{end_time_admissible, hour_admissible};
use crate::booking::Booking;
use crate::policy::SlotPolicy;

/// All admissible start instants on `day` (in the policy timezone), at
/// the policy step, earliest first.
pub fn start_slots(
    policy: &SlotPolicy,
    day: NaiveDate,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> Vec<DateTime<Utc>> {
    day_grid(policy, day)
        .into_iter()
        .filter(|t| hour_admissible(policy, *t, bookings, now))
        .collect()
}

/// All admissible end instants on `day` for a booking starting at
/// `start`, at the policy step, earliest first.
pub fn end_slots(
    policy: &SlotPolicy,
    day: NaiveDate,
    start: DateTime<Utc>,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> Vec<DateTime<Utc>> {
    day_grid(policy, day)
        .into_iter()
        .filter(|t| end_time_admissible(policy, *t, start, bookings, now))
        .collect()
}

/// Every step-aligned instant of the local `day`, from local midnight up
/// to (excluding) the next local midnight.
///
/// A day whose local midnight does not exist in the policy timezone (a
/// DST gap can swallow it) yields an empty grid.
fn day_grid(policy: &SlotPolicy, day: NaiveDate) -> Vec<DateTime<Utc>> {
    let Some(open) = local_midnight(policy, day) else {
        return Vec::new();
    };
    let close = day
        .succ_opt()
        .and_then(|next| local_midnight(policy, next))
        .unwrap_or(open + Duration::days(1));

    let mut slots = Vec::new();
    let mut t = open;
    while t < close {
        slots.push(t);
        t += policy.step();
    }
    slots
}

fn local_midnight(policy: &SlotPolicy, day: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    policy
        .tz
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
